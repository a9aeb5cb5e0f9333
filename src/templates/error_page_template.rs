use askama::Template;

#[derive(Template)]
#[template(path = "error_page.html")]
pub struct ErrorPageTemplate {
    pub title: &'static str,
    pub error_title: &'static str,
    pub error_message: &'static str,
}

impl ErrorPageTemplate {
    /// Shown while the compute zone is unknown.
    pub fn zone_unresolved() -> Self {
        Self {
            title: "Error!!1",
            error_title: "Cannot determine the compute zone",
            error_message: "Is it running on a Google Compute Engine or Cloud Run?",
        }
    }
}
