use std::sync::Arc;

use crate::db::json_store::JsonStore;

#[derive(Clone)]
pub struct JsonStoreRepo {
    pub store: Arc<JsonStore>,
}

impl JsonStoreRepo {
    pub fn new(store: Arc<JsonStore>) -> Self {
        JsonStoreRepo { store }
    }
}
