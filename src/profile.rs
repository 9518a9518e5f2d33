use chrono::{DateTime, Datelike, NaiveDate};
use rust_embed::Embed;
use serde::{Deserialize, Serialize};
use std::{string::FromUtf8Error, sync::LazyLock};
use thiserror::Error;

const PROFILE_FILE: &str = "profile.json";

static PROFILE: LazyLock<Result<Profile, ProfileError>> = LazyLock::new(Profile::load);

#[derive(Embed)]
#[folder = "content"]
pub struct Content;

#[derive(Error, Debug)]
pub enum ProfileError {
    #[error("profile content not found: {0}")]
    Missing(&'static str),
    #[error("profile content is not valid UTF-8")]
    Utf8(#[from] FromUtf8Error),
    #[error("couldn't parse profile content: {0}")]
    Parse(#[from] serde_json::Error),
    #[error("invalid profile content: {0}")]
    Invalid(String),
}

/// Colour family used to tint cards, dots and icons. Each method returns
/// complete class names so the stylesheet build can see them.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Accent {
    Blue,
    Green,
    Purple,
    Orange,
    Black,
}

impl Accent {
    pub fn text(&self) -> &'static str {
        match self {
            Self::Blue => "text-blue-600",
            Self::Green => "text-green-600",
            Self::Purple => "text-purple-600",
            Self::Orange => "text-orange-600",
            Self::Black => "text-slate-800",
        }
    }

    pub fn solid(&self) -> &'static str {
        match self {
            Self::Blue => "bg-blue-500",
            Self::Green => "bg-green-500",
            Self::Purple => "bg-purple-500",
            Self::Orange => "bg-orange-500",
            Self::Black => "bg-slate-800",
        }
    }

    pub fn soft(&self) -> &'static str {
        match self {
            Self::Blue => "bg-blue-100",
            Self::Green => "bg-green-100",
            Self::Purple => "bg-purple-100",
            Self::Orange => "bg-orange-100",
            Self::Black => "bg-slate-200",
        }
    }

    pub fn tint(&self) -> &'static str {
        match self {
            Self::Blue => "bg-blue-50 hover:bg-blue-100",
            Self::Green => "bg-green-50 hover:bg-green-100",
            Self::Purple => "bg-purple-50 hover:bg-purple-100",
            Self::Orange => "bg-orange-50 hover:bg-orange-100",
            Self::Black => "bg-slate-100 hover:bg-slate-200",
        }
    }

    pub fn gradient(&self) -> &'static str {
        match self {
            Self::Blue => "from-blue-400 to-blue-600",
            Self::Green => "from-green-400 to-green-600",
            Self::Purple => "from-purple-400 to-purple-600",
            Self::Orange => "from-orange-400 to-orange-600",
            Self::Black => "from-slate-600 to-slate-900",
        }
    }

    pub fn edge(&self) -> &'static str {
        match self {
            Self::Blue => "border-l-blue-500",
            Self::Green => "border-l-green-500",
            Self::Purple => "border-l-purple-500",
            Self::Orange => "border-l-orange-500",
            Self::Black => "border-l-slate-800",
        }
    }

    pub fn outline(&self) -> &'static str {
        match self {
            Self::Blue => "text-blue-600 border-blue-600",
            Self::Green => "text-green-600 border-green-600",
            Self::Purple => "text-purple-600 border-purple-600",
            Self::Orange => "text-orange-600 border-orange-600",
            Self::Black => "text-slate-800 border-slate-800",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum Icon {
    TestTube,
    Code,
    Zap,
    Sparkles,
    Users,
    GraduationCap,
    Building,
    Award,
    Calendar,
    Mail,
    Phone,
    Map,
    MapPin,
    ExternalLink,
    Star,
    ChevronDown,
    ArrowRight,
    Download,
}

impl Icon {
    /// Icon-font class for the glyph.
    pub fn class(&self) -> &'static str {
        match self {
            Self::TestTube => "extra-test-tube",
            Self::Code => "extra-code",
            Self::Zap => "extra-zap",
            Self::Sparkles => "extra-sparkles",
            Self::Users => "extra-users",
            Self::GraduationCap => "extra-graduation-cap",
            Self::Building => "extra-building",
            Self::Award => "extra-award",
            Self::Calendar => "extra-calendar",
            Self::Mail => "extra-email",
            Self::Phone => "extra-phone",
            Self::Map => "extra-map",
            Self::MapPin => "extra-location",
            Self::ExternalLink => "extra-link",
            Self::Star => "extra-star",
            Self::ChevronDown => "extra-chevron-down",
            Self::ArrowRight => "extra-arrow-right",
            Self::Download => "extra-download",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SocialKind {
    Linkedin,
    Facebook,
    Whatsapp,
    Github,
    Email,
}

impl SocialKind {
    pub fn icon_class(&self) -> &'static str {
        match self {
            Self::Linkedin => "devicon-linkedin-plain",
            Self::Facebook => "devicon-facebook-plain",
            Self::Whatsapp => "extra-chat",
            Self::Github => "devicon-github-plain",
            Self::Email => "extra-email",
        }
    }

    pub fn background(&self) -> &'static str {
        match self {
            Self::Linkedin => "bg-blue-600",
            Self::Facebook => "bg-blue-500",
            Self::Whatsapp => "bg-green-500",
            Self::Github => "bg-slate-800",
            Self::Email => "bg-red-500",
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            Self::Linkedin => "LinkedIn Profile",
            Self::Facebook => "Facebook Profile",
            Self::Whatsapp => "WhatsApp",
            Self::Github => "GitHub Profile",
            Self::Email => "Email",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SocialLink {
    pub kind: SocialKind,
    pub href: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Highlight {
    pub icon: Icon,
    pub value: String,
    pub label: String,
    pub accent: Accent,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct About {
    pub heading: String,
    pub paragraphs: Vec<String>,
    pub highlights: Vec<Highlight>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Tool {
    pub name: String,
    #[serde(default)]
    pub logo: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ToolCategory {
    pub title: String,
    pub icon: Icon,
    pub accent: Accent,
    pub tools: Vec<Tool>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Job {
    pub title: String,
    pub company: String,
    pub start: NaiveDate,
    #[serde(default)]
    pub end: Option<NaiveDate>,
    pub accent: Accent,
    pub achievements: Vec<String>,
}

impl Job {
    pub fn is_current(&self) -> bool {
        self.end.is_none()
    }

    pub fn period(&self) -> String {
        let end = self
            .end
            .map(|d| d.format("%b %Y").to_string())
            .unwrap_or_else(|| "Present".to_string());
        format!("{} – {}", self.start.format("%b %Y"), end)
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Education {
    pub degree: String,
    pub institution: String,
    pub icon: Icon,
    pub accent: Accent,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ContactCard {
    pub heading: String,
    pub headline: String,
    pub blurb: String,
    pub socials: Vec<SocialLink>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Profile {
    pub name: String,
    pub headline: String,
    pub summary: String,
    pub location: String,
    pub address: String,
    pub phone: String,
    pub email: String,
    pub resume: String,
    pub photo: String,
    pub socials: Vec<SocialLink>,
    pub about: About,
    pub skills_tagline: String,
    pub tool_categories: Vec<ToolCategory>,
    pub experience: Vec<Job>,
    pub education: Vec<Education>,
    pub contact: ContactCard,
}

impl Profile {
    /// Reads and validates the embedded profile content.
    pub fn load() -> Result<Self, ProfileError> {
        let file = Content::get(PROFILE_FILE).ok_or(ProfileError::Missing(PROFILE_FILE))?;
        let text = String::from_utf8(file.data.into_owned())?;
        Self::parse(&text)
    }

    pub fn parse(text: &str) -> Result<Self, ProfileError> {
        let profile = serde_json::from_str::<Profile>(text)?;
        profile.validate()?;
        Ok(profile)
    }

    fn validate(&self) -> Result<(), ProfileError> {
        if self.name.trim().is_empty() {
            return Err(ProfileError::Invalid("name is empty".to_string()));
        }
        if self.email.trim().is_empty() {
            return Err(ProfileError::Invalid("email is empty".to_string()));
        }
        if let Some(category) = self.tool_categories.iter().find(|c| c.tools.is_empty()) {
            return Err(ProfileError::Invalid(format!(
                "tool category '{}' has no tools",
                category.title
            )));
        }
        for job in &self.experience {
            if job.end.is_some_and(|end| end < job.start) {
                return Err(ProfileError::Invalid(format!(
                    "'{}' at {} ends before it starts",
                    job.title, job.company
                )));
            }
        }
        Ok(())
    }

    pub fn mailto(&self) -> String {
        format!("mailto:{}", self.email.trim())
    }

    pub fn tel(&self) -> String {
        let digits = self
            .phone
            .chars()
            .filter(|c| c.is_ascii_digit() || *c == '+')
            .collect::<String>();
        format!("tel:{digits}")
    }
}

/// The embedded profile, parsed on first use.
pub fn profile() -> Result<&'static Profile, &'static ProfileError> {
    PROFILE.as_ref()
}

/// Year the site was built, for the copyright line.
pub fn build_year() -> Option<i32> {
    DateTime::parse_from_rfc3339(env!("BUILD_TIME"))
        .ok()
        .map(|t| t.year())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn job(start: (i32, u32), end: Option<(i32, u32)>) -> Job {
        let date = |(y, m): (i32, u32)| NaiveDate::from_ymd_opt(y, m, 1).unwrap();
        Job {
            title: "QA Intern".to_string(),
            company: "Acme".to_string(),
            start: date(start),
            end: end.map(date),
            accent: Accent::Green,
            achievements: vec![],
        }
    }

    #[test]
    fn test_embedded_profile_loads() {
        let profile = profile().expect("embedded profile should parse");
        assert!(!profile.name.is_empty());
        assert_eq!(profile.tool_categories.len(), 4);
        assert!(profile
            .tool_categories
            .iter()
            .all(|c| !c.tools.is_empty()));
        assert_eq!(profile.about.highlights.len(), 4);
        assert!(!profile.experience.is_empty());
        assert!(!profile.education.is_empty());
        assert!(profile.resume.ends_with(".pdf"));
        assert_eq!(
            profile.experience.iter().filter(|j| j.is_current()).count(),
            1
        );
    }

    #[test]
    fn test_period_formatting() {
        assert_eq!(job((2024, 7), None).period(), "Jul 2024 – Present");
        assert_eq!(
            job((2024, 1), Some((2024, 4))).period(),
            "Jan 2024 – Apr 2024"
        );
    }

    #[test]
    fn test_links() {
        let profile = profile().expect("embedded profile should parse");
        assert!(profile.mailto().starts_with("mailto:"));
        assert!(!profile.mailto().contains(' '));
        let tel = profile.tel();
        assert!(tel[4..].chars().all(|c| c.is_ascii_digit() || c == '+'));
    }

    #[test]
    fn test_rejects_invalid_content() {
        let good = profile().expect("embedded profile should parse").clone();

        let mut nameless = good.clone();
        nameless.name = "  ".to_string();
        let text = serde_json::to_string(&nameless).unwrap();
        assert!(matches!(
            Profile::parse(&text),
            Err(ProfileError::Invalid(_))
        ));

        let mut backwards = good.clone();
        backwards.experience = vec![job((2024, 5), Some((2024, 1)))];
        let text = serde_json::to_string(&backwards).unwrap();
        assert!(matches!(
            Profile::parse(&text),
            Err(ProfileError::Invalid(_))
        ));

        let mut empty_category = good;
        empty_category.tool_categories[0].tools.clear();
        let text = serde_json::to_string(&empty_category).unwrap();
        assert!(matches!(
            Profile::parse(&text),
            Err(ProfileError::Invalid(_))
        ));

        assert!(matches!(
            Profile::parse("{\"name\": \"x\"}"),
            Err(ProfileError::Parse(_))
        ));
    }

    #[test]
    fn test_unknown_accent_rejected() {
        assert!(serde_json::from_str::<Accent>("\"teal\"").is_err());
        assert_eq!(
            serde_json::from_str::<Icon>("\"graduation-cap\"").unwrap(),
            Icon::GraduationCap
        );
    }

    #[test]
    fn test_build_year() {
        assert!(build_year().is_some_and(|y| y >= 2024));
    }
}
