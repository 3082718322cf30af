use crate::core::domain::Identifiable;

pub mod model;

pub trait Book: Identifiable {
    fn title(&self) -> &str;
    fn authors(&self) -> &[String];
    fn image_url(&self) -> &str;

    fn authors_line(&self) -> String {
        self.authors().join(", ")
    }
}
