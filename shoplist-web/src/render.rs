//! HTML rendering of the list page.

use minijinja::{Environment, context};
use shoplist::list::ShoppingList;

const LIST_TEMPLATE: &str = include_str!("../templates/list.html");

/// Template engine wrapper around minijinja.
///
/// Templates are registered under `.html` names so minijinja autoescapes
/// every interpolated value.
pub struct PageRenderer {
    env: Environment<'static>,
}

impl PageRenderer {
    pub fn new() -> Result<Self, minijinja::Error> {
        let mut env = Environment::new();
        env.add_template("list.html", LIST_TEMPLATE)?;
        Ok(Self { env })
    }

    pub fn render_list(&self, title: &str, list: &ShoppingList) -> Result<String, minijinja::Error> {
        let template = self.env.get_template("list.html")?;
        template.render(context! {
            title => title,
            items => list.items(),
            has_done => list.has_done(),
        })
    }
}
