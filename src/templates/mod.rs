//! Email rendering for contact submissions.
//!
//! Rendering is pure: the same [`EmailTemplates`] and the same submission
//! always produce byte-identical output. HTML bodies are built with `maud`,
//! which escapes every interpolated value.

mod confirmation;
mod operator;

use chrono::Datelike;
use serde::Serialize;

/// Subject and bodies of one email.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct RenderedEmail {
    pub subject: String,
    pub html: String,
    pub text: String,
}

/// Branding shared by all emails.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EmailTemplates {
    brand_name: String,
    site_url: String,
    year: i32,
}

impl EmailTemplates {
    /// Templates stamped with the current year in the footer.
    pub fn new(brand_name: impl Into<String>, site_url: impl Into<String>) -> Self {
        Self::with_year(brand_name, site_url, chrono::Local::now().year())
    }

    /// Templates with a fixed footer year.
    pub fn with_year(
        brand_name: impl Into<String>,
        site_url: impl Into<String>,
        year: i32,
    ) -> Self {
        Self {
            brand_name: brand_name.into(),
            site_url: site_url.into(),
            year,
        }
    }

    pub fn brand_name(&self) -> &str {
        &self.brand_name
    }

    pub fn site_url(&self) -> &str {
        &self.site_url
    }

    pub fn year(&self) -> i32 {
        self.year
    }
}

fn callback_label(requested: bool) -> &'static str {
    if requested {
        "Ja, bitte zurückrufen"
    } else {
        "Nicht erforderlich"
    }
}
