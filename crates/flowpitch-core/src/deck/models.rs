use serde::{Deserialize, Serialize};

/// Display layout of a slide
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SlideLayout {
    #[default]
    Standard,
    /// Before/after comparison with value chips
    Hero,
}

/// Headline number with a caption, e.g. "60s / deck → pitch link"
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Metric {
    pub num: String,
    pub label: String,
}

/// One content slide. Fields that do not apply to the slide's layout are ignored.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Slide {
    #[serde(default)]
    pub layout: SlideLayout,
    #[serde(default)]
    pub kicker: String,
    pub title: String,
    #[serde(default)]
    pub subtitle: String,
    #[serde(default)]
    pub bullets: Vec<String>,
    #[serde(default)]
    pub before: Vec<String>,
    #[serde(default)]
    pub after: Vec<String>,
    #[serde(default)]
    pub value_chips: Vec<String>,
    #[serde(default)]
    pub metric: Option<Metric>,
    /// Tag shown next to the "Before" badge on hero slides
    #[serde(default)]
    pub before_tag: Option<String>,
    /// Tag shown next to the "After" badge on hero slides
    #[serde(default)]
    pub after_tag: Option<String>,
}

/// Layout-specific view of a slide's body
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SlideBody<'a> {
    Standard {
        bullets: &'a [String],
    },
    Hero {
        before: &'a [String],
        after: &'a [String],
        chips: &'a [String],
        before_tag: &'a str,
        after_tag: &'a str,
    },
}

impl Slide {
    pub const DEFAULT_BEFORE_TAG: &'static str = "Static file • No signal";
    pub const DEFAULT_AFTER_TAG: &'static str = "Live link • Trackable";

    pub fn body(&self) -> SlideBody<'_> {
        match self.layout {
            SlideLayout::Standard => SlideBody::Standard {
                bullets: &self.bullets,
            },
            SlideLayout::Hero => SlideBody::Hero {
                before: &self.before,
                after: &self.after,
                chips: &self.value_chips,
                before_tag: self.before_tag.as_deref().unwrap_or(Self::DEFAULT_BEFORE_TAG),
                after_tag: self.after_tag.as_deref().unwrap_or(Self::DEFAULT_AFTER_TAG),
            },
        }
    }
}

/// An ordered, immutable list of slides
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Deck {
    #[serde(default)]
    pub title: String,
    #[serde(default)]
    pub slides: Vec<Slide>,
}

impl Deck {
    #[inline]
    pub fn len(&self) -> usize {
        self.slides.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.slides.is_empty()
    }

    /// Deck title, falling back to the first slide's kicker
    pub fn display_title(&self) -> &str {
        if !self.title.is_empty() {
            return &self.title;
        }
        self.slides.first().map(|s| s.kicker.as_str()).unwrap_or("")
    }
}
