pub mod error_page_template;
pub mod success_page_template;

pub use error_page_template::ErrorPageTemplate;
pub use success_page_template::SuccessPageTemplate;
