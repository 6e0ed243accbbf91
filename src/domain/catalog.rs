use std::collections::HashMap;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::entities::freelancer::FreelancerProfile;

/// Experience/price bracket of a catalog slice.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Tier {
    Beginner,
    Intermediate,
    Expert,
}

impl Tier {
    pub const ALL: [Tier; 3] = [Tier::Beginner, Tier::Intermediate, Tier::Expert];

    pub fn as_str(&self) -> &'static str {
        match self {
            Tier::Beginner => "beginner",
            Tier::Intermediate => "intermediate",
            Tier::Expert => "expert",
        }
    }
}

impl FromStr for Tier {
    type Err = ();

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "beginner" => Ok(Tier::Beginner),
            "intermediate" => Ok(Tier::Intermediate),
            "expert" => Ok(Tier::Expert),
            _ => Err(()),
        }
    }
}

/// Job/skill category of a catalog slice.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum Category {
    LogoDesign,
    WebDesign,
    Branding,
    Illustration,
    UiUx,
    ContentWriting,
    SocialMedia,
    VideoEditing,
}

impl Category {
    pub const ALL: [Category; 8] = [
        Category::LogoDesign,
        Category::WebDesign,
        Category::Branding,
        Category::Illustration,
        Category::UiUx,
        Category::ContentWriting,
        Category::SocialMedia,
        Category::VideoEditing,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            Category::LogoDesign => "logo-design",
            Category::WebDesign => "web-design",
            Category::Branding => "branding",
            Category::Illustration => "illustration",
            Category::UiUx => "ui-ux",
            Category::ContentWriting => "content-writing",
            Category::SocialMedia => "social-media",
            Category::VideoEditing => "video-editing",
        }
    }
}

impl FromStr for Category {
    type Err = ();

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "logo-design" => Ok(Category::LogoDesign),
            "web-design" => Ok(Category::WebDesign),
            "branding" => Ok(Category::Branding),
            "illustration" => Ok(Category::Illustration),
            "ui-ux" => Ok(Category::UiUx),
            "content-writing" => Ok(Category::ContentWriting),
            "social-media" => Ok(Category::SocialMedia),
            "video-editing" => Ok(Category::VideoEditing),
            _ => Err(()),
        }
    }
}

/// Immutable lookup table keyed by tier and category. No logic beyond
/// slice lookup lives here.
#[derive(Debug, Clone)]
pub struct Catalog {
    entries: HashMap<Tier, HashMap<Category, Vec<FreelancerProfile>>>,
}

impl Catalog {
    pub fn with_entries(entries: HashMap<Tier, HashMap<Category, Vec<FreelancerProfile>>>) -> Self {
        Catalog { entries }
    }

    pub fn slice(&self, tier: Tier, category: Category) -> Option<&[FreelancerProfile]> {
        self.entries
            .get(&tier)
            .and_then(|by_category| by_category.get(&category))
            .map(|profiles| profiles.as_slice())
    }

    /// Sentinel returned whenever a lookup misses. Never an error: the
    /// caller always gets a renderable profile.
    pub fn fallback() -> FreelancerProfile {
        profile("Available Soon", "AS", "Coming Soon", "Expanding our network", "Contact us", "Worldwide", 0)
    }

    pub fn builtin() -> Self {
        let mut entries: HashMap<Tier, HashMap<Category, Vec<FreelancerProfile>>> = HashMap::new();

        let beginner = entries.entry(Tier::Beginner).or_default();
        beginner.insert(Category::LogoDesign, vec![
            profile("Alex Chen", "AC", "Logo Design", "1-2 years experience", "$25/hour", "New York, NY", 15),
            profile("Maya Patel", "MP", "Logo & Branding", "2 years experience", "$30/hour", "Austin, TX", 22),
        ]);
        beginner.insert(Category::WebDesign, vec![
            profile("Jake Wilson", "JW", "Web Design", "1 year experience", "$20/hour", "Seattle, WA", 8),
            profile("Lisa Kim", "LK", "Landing Pages", "1.5 years experience", "$28/hour", "San Diego, CA", 12),
        ]);
        beginner.insert(Category::Branding, vec![
            profile("Sam Rodriguez", "SR", "Brand Identity", "2 years experience", "$35/hour", "Miami, FL", 18),
        ]);
        beginner.insert(Category::Illustration, vec![
            profile("Emma Thompson", "ET", "Digital Illustration", "1.5 years experience", "$22/hour", "Portland, OR", 14),
        ]);
        beginner.insert(Category::UiUx, vec![
            profile("David Lee", "DL", "Mobile UI Design", "2 years experience", "$32/hour", "Chicago, IL", 16),
        ]);
        beginner.insert(Category::ContentWriting, vec![
            profile("Sarah Johnson", "SJ", "Blog Writing", "1 year experience", "$18/hour", "Denver, CO", 25),
        ]);
        beginner.insert(Category::SocialMedia, vec![
            profile("Mike Chen", "MC", "Instagram Design", "1.5 years experience", "$24/hour", "Los Angeles, CA", 30),
        ]);
        beginner.insert(Category::VideoEditing, vec![
            profile("Anna Davis", "AD", "Social Media Videos", "2 years experience", "$26/hour", "Nashville, TN", 20),
        ]);

        let intermediate = entries.entry(Tier::Intermediate).or_default();
        intermediate.insert(Category::LogoDesign, vec![
            profile("Carlos Martinez", "CM", "Logo Design Expert", "4 years experience", "$55/hour", "Phoenix, AZ", 65),
            profile("Nina Foster", "NF", "Brand Logo Design", "3.5 years experience", "$50/hour", "Boston, MA", 58),
        ]);
        intermediate.insert(Category::WebDesign, vec![
            profile("Ryan Cooper", "RC", "E-commerce Design", "4 years experience", "$60/hour", "San Francisco, CA", 42),
            profile("Zoe Williams", "ZW", "Responsive Web Design", "3 years experience", "$48/hour", "Atlanta, GA", 38),
        ]);
        intermediate.insert(Category::Branding, vec![
            profile("Jordan Blake", "JB", "Complete Brand Identity", "4.5 years experience", "$65/hour", "Washington, DC", 35),
        ]);
        intermediate.insert(Category::Illustration, vec![
            profile("Taylor Swift", "TS", "Character Design", "3.5 years experience", "$45/hour", "Minneapolis, MN", 52),
        ]);
        intermediate.insert(Category::UiUx, vec![
            profile("Morgan Ali", "MA", "UX Research & Design", "4 years experience", "$70/hour", "Philadelphia, PA", 28),
        ]);
        intermediate.insert(Category::ContentWriting, vec![
            profile("Casey Rivers", "CR", "Technical Writing", "3 years experience", "$40/hour", "Raleigh, NC", 75),
        ]);
        intermediate.insert(Category::SocialMedia, vec![
            profile("Alex Harper", "AH", "Social Media Strategy", "4 years experience", "$55/hour", "Las Vegas, NV", 85),
        ]);
        intermediate.insert(Category::VideoEditing, vec![
            profile("Jamie Parker", "JP", "Corporate Video Editing", "3.5 years experience", "$52/hour", "Salt Lake City, UT", 48),
        ]);

        let expert = entries.entry(Tier::Expert).or_default();
        expert.insert(Category::LogoDesign, vec![
            profile("Victoria Sterling", "VS", "Premium Logo Design", "8 years experience", "$120/hour", "New York, NY", 180),
            profile("Marcus Gold", "MG", "Luxury Brand Logos", "7 years experience", "$110/hour", "Los Angeles, CA", 156),
        ]);
        expert.insert(Category::WebDesign, vec![
            profile("Isabella Rose", "IR", "Enterprise Web Design", "6 years experience", "$95/hour", "San Francisco, CA", 78),
            profile("Sebastian Vale", "SV", "High-End Web Solutions", "9 years experience", "$125/hour", "Seattle, WA", 92),
        ]);
        expert.insert(Category::Branding, vec![
            profile("Olivia Stark", "OS", "Strategic Brand Consultant", "10 years experience", "$150/hour", "Chicago, IL", 65),
        ]);
        expert.insert(Category::Illustration, vec![
            profile("Phoenix Wright", "PW", "Creative Illustration Director", "7 years experience", "$85/hour", "Portland, OR", 120),
        ]);
        expert.insert(Category::UiUx, vec![
            profile("Nova Bright", "NB", "Senior UX Architect", "8 years experience", "$140/hour", "Austin, TX", 55),
        ]);
        expert.insert(Category::ContentWriting, vec![
            profile("Sage Morgan", "SM", "Content Strategy Lead", "6 years experience", "$75/hour", "Denver, CO", 200),
        ]);
        expert.insert(Category::SocialMedia, vec![
            profile("River Stone", "RS", "Social Media Creative Director", "7 years experience", "$90/hour", "Miami, FL", 150),
        ]);
        expert.insert(Category::VideoEditing, vec![
            profile("Storm Chase", "SC", "Senior Video Producer", "9 years experience", "$105/hour", "Nashville, TN", 88),
        ]);

        Catalog { entries }
    }
}

fn profile(
    name: &str,
    avatar: &str,
    specialty: &str,
    experience: &str,
    rate: &str,
    location: &str,
    projects: u32,
) -> FreelancerProfile {
    FreelancerProfile {
        name: name.to_string(),
        avatar: avatar.to_string(),
        specialty: specialty.to_string(),
        experience: experience.to_string(),
        rate: rate.to_string(),
        location: location.to_string(),
        projects,
    }
}
