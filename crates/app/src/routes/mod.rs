pub mod dish_form;
pub mod not_found;

use dioxus::prelude::*;

use dish_form::DishFormPage;
use not_found::NotFound;

/// Application routes.
#[derive(Clone, Routable, Debug, PartialEq)]
pub enum Route {
    #[route("/")]
    DishFormPage {},
    #[route("/:..route")]
    NotFound { route: Vec<String> },
}
