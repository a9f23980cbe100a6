use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ItemKind {
    #[serde(rename = "subject")]
    Subject,
    #[serde(rename = "pdf")]
    Pdf,
    #[serde(rename = "ppt")]
    Slides,
}

impl ItemKind {
    /// Keyword used in catalogs and matched by search queries.
    pub fn label(self) -> &'static str {
        match self {
            Self::Subject => "subject",
            Self::Pdf => "pdf",
            Self::Slides => "ppt",
        }
    }
}

/// Icon shown next to a search result. Unknown names render as a subject.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub enum IconKind {
    #[default]
    Subject,
    Pdf,
    Slides,
}

impl IconKind {
    pub fn css_class(self) -> &'static str {
        match self {
            Self::Subject => "subject",
            Self::Pdf => "pdf",
            Self::Slides => "ppt",
        }
    }
}

impl From<String> for IconKind {
    fn from(value: String) -> Self {
        match value.as_str() {
            "pdf" => Self::Pdf,
            "ppt" => Self::Slides,
            _ => Self::Subject,
        }
    }
}

impl From<IconKind> for String {
    fn from(value: IconKind) -> Self {
        value.css_class().to_owned()
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SearchItem {
    #[serde(rename = "type")]
    pub kind: ItemKind,
    pub title: String,
    pub subtitle: String,
    pub url: String,
    #[serde(default)]
    pub icon: IconKind,
}

impl SearchItem {
    pub fn new(kind: ItemKind, title: &str, subtitle: &str, url: &str, icon: IconKind) -> Self {
        Self {
            kind,
            title: title.to_owned(),
            subtitle: subtitle.to_owned(),
            url: url.to_owned(),
            icon,
        }
    }

    /// PDFs are external documents and open in a separate tab.
    pub fn opens_in_new_tab(&self) -> bool {
        self.kind == ItemKind::Pdf
    }

    /// Lowercased text a query is matched against.
    pub fn haystack(&self) -> String {
        format!("{} {} {}", self.title, self.subtitle, self.kind.label()).to_lowercase()
    }
}

#[derive(Debug, thiserror::Error)]
pub enum CatalogError {
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
    #[error("catalog parse error: {0}")]
    Parse(#[from] serde_json::Error),
    #[error("catalog contains no items")]
    Empty,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Catalog {
    items: Vec<SearchItem>,
}

impl Catalog {
    pub fn new(items: Vec<SearchItem>) -> Self {
        Self { items }
    }

    pub fn from_json_str(json: &str) -> Result<Self, CatalogError> {
        let items: Vec<SearchItem> = serde_json::from_str(json)?;
        if items.is_empty() {
            return Err(CatalogError::Empty);
        }

        Ok(Self { items })
    }

    pub fn load(path: &Path) -> Result<Self, CatalogError> {
        let json = fs::read_to_string(path)?;
        Self::from_json_str(&json)
    }

    pub fn items(&self) -> &[SearchItem] {
        &self.items
    }

    pub fn get(&self, index: usize) -> Option<&SearchItem> {
        self.items.get(index)
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// Resources published on the portal, in dashboard order.
    pub fn builtin() -> Self {
        use IconKind as I;
        use ItemKind::{Pdf, Slides, Subject};

        let entries: &[(ItemKind, &str, &str, &str, IconKind)] = &[
            (Subject, "Machine Learning", "Subject", "/subjects/ML.html", I::Subject),
            (Subject, "Operating Systems", "Subject", "/subjects/OS.html", I::Subject),
            (Subject, "Web Technologies", "Subject", "/subjects/WT.html", I::Subject),
            (Subject, "AI & Deep Learning", "Subject", "/subjects/AI_DL.html", I::Subject),
            (Subject, "Cyber Security", "Subject", "/subjects/CS_CL.html", I::Subject),
            (Subject, "Big Data Analytics", "Subject", "/subjects/BDA.html", I::Subject),
            (Subject, "Basics of Entrepreneurship", "Subject", "/subjects/BOE.html", I::Subject),
            (Pdf, "ML Syllabus", "Machine Learning", "/public/subjects/ML_Syllabus.pdf", I::Pdf),
            (Pdf, "WT Lab Manual", "Web Technologies", "/public/subjects/WT_LAB_9FC06.pdf", I::Pdf),
            (
                Pdf,
                "OS/ML Lab Syllabus",
                "Operating Systems",
                "/public/subjects/OS_ML_LAB_SYLLABUS.pdf",
                I::Pdf,
            ),
            (
                Pdf,
                "WT Unit 1 - HTML4 & CSS3",
                "Web Technologies",
                "/public/subjects/WT/Unit_1_HTML4_CSS3.pdf",
                I::Pdf,
            ),
            (
                Pdf,
                "WT Unit 1 - HTML5 & CSS3",
                "Web Technologies",
                "/public/subjects/WT/Unit_1_HTML5_CSS3.pdf",
                I::Pdf,
            ),
            (
                Pdf,
                "WT Unit 1 - Tailwind CSS",
                "Web Technologies",
                "/public/subjects/WT/Unit_1_TailwindCSS.pdf",
                I::Pdf,
            ),
            (
                Pdf,
                "WT Unit 2 - JS Basics",
                "Web Technologies",
                "/public/subjects/WT/Unit_2_JS_Basics.pdf",
                I::Pdf,
            ),
            (
                Pdf,
                "WT Unit 2 - JS Advanced",
                "Web Technologies",
                "/public/subjects/WT/Unit_2_JS_Advanced.pdf",
                I::Pdf,
            ),
            (
                Pdf,
                "WT Unit 3 - Node.js",
                "Web Technologies",
                "/public/subjects/WT/Unit_3_Nodejs.pdf",
                I::Pdf,
            ),
            (
                Pdf,
                "WT Unit 3 - MERN Stack",
                "Web Technologies",
                "/public/subjects/WT/Unit_3_MERN_STACK.pdf",
                I::Pdf,
            ),
            (
                Pdf,
                "CS Unit 1 - Introduction",
                "Cyber Security",
                "/public/subjects/CS_CL/UNIT I.pdf",
                I::Pdf,
            ),
            (
                Pdf,
                "CS Unit 1 - DES & Mode Operations",
                "Cyber Security",
                "/public/subjects/CS_CL/UNIT 1- DES^Jmode op^.pdf",
                I::Pdf,
            ),
            (
                Pdf,
                "CS Unit 1 - Substitution & Transposition",
                "Cyber Security",
                "/public/subjects/CS_CL/UNIT 1- sub & tran.pdf",
                I::Pdf,
            ),
            (Pdf, "CS Unit 2", "Cyber Security", "/public/subjects/CS_CL/Unit 2.pdf", I::Pdf),
            (Pdf, "CS Unit 3", "Cyber Security", "/public/subjects/CS_CL/Unit 3.pdf", I::Pdf),
            (
                Slides,
                "ML Unit 1 Slides",
                "Machine Learning",
                "/viewer.html?mode=image&count=118&src=/public/subjects/ML/Unit1_slides/",
                I::Slides,
            ),
            (
                Slides,
                "OS Unit 1 Slides",
                "Operating Systems",
                "/viewer.html?mode=image&count=54&src=/public/subjects/OS/OS_UNIT_1/",
                I::Slides,
            ),
            (
                Slides,
                "OS Unit 2 Slides",
                "Operating Systems",
                "/viewer.html?mode=image&count=65&src=/public/subjects/OS/OS_UNIT_2/",
                I::Slides,
            ),
            (
                Slides,
                "OS Unit 3 Slides",
                "Operating Systems",
                "/viewer.html?mode=image&count=56&src=/public/subjects/OS/Unit3_slides/",
                I::Slides,
            ),
            (
                Slides,
                "AI/DL Unit 1 Slides",
                "AI & Deep Learning",
                "/viewer.html?mode=image&count=54&src=/public/subjects/AI_DL/Unit1_slides/",
                I::Slides,
            ),
        ];

        let items = entries
            .iter()
            .map(|(kind, title, subtitle, url, icon)| {
                SearchItem::new(*kind, title, subtitle, url, *icon)
            })
            .collect();

        Self { items }
    }
}

impl Default for Catalog {
    fn default() -> Self {
        Self::builtin()
    }
}
