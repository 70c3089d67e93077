//! HTML views.
//!
//! Every view is rendered through the same [`Environment`], whose `.html` template names turn on
//! HTML auto-escaping. The only way around it is [`UnescapedHtml`].

use minijinja::{Environment, Value, context};
use serde::Serialize;
use sparta_common::{
    fibonacci::{FibonacciInputError, MAX_FIBONACCI_INPUT},
    model::post::Post,
};
use time::{format_description::BorrowedFormatItem, macros::format_description};

const TEMPLATES: [(&str, &str); 4] = [
    ("layout.html", include_str!("../../templates/layout.html")),
    (PostListView::TEMPLATE, include_str!("../../templates/posts/index.html")),
    (FibonacciView::TEMPLATE, include_str!("../../templates/fibonacci/index.html")),
    (HackableView::TEMPLATE, include_str!("../../templates/hackable/index.html")),
];

const CREATED_AT_FORMAT: &[BorrowedFormatItem<'static>] =
    format_description!("[year]-[month]-[day] [hour]:[minute]:[second] UTC");

pub trait View {
    const TEMPLATE: &'static str;

    fn context(&self) -> Value;
}

#[derive(Debug)]
pub struct Views {
    env: Environment<'static>,
}

impl Views {
    pub fn new() -> Result<Self, minijinja::Error> {
        let mut env = Environment::new();
        for (name, source) in TEMPLATES {
            env.add_template(name, source)?;
        }

        Ok(Self { env })
    }

    pub fn render<V: View>(&self, view: &V) -> Result<String, minijinja::Error> {
        self.env.get_template(V::TEMPLATE)?.render(view.context())
    }
}

/// Markup that is inserted into a template verbatim.
///
/// Whatever is wrapped here reaches the browser as-is, so any user input inside it is an
/// injection vector.
#[derive(Clone, Eq, PartialEq, Debug, Hash)]
pub struct UnescapedHtml(String);

impl UnescapedHtml {
    #[must_use]
    pub fn new_unescaped(markup: String) -> Self {
        Self(markup)
    }
}

impl From<UnescapedHtml> for Value {
    fn from(value: UnescapedHtml) -> Self {
        Value::from_safe_string(value.0)
    }
}

#[derive(Clone, Eq, PartialEq, Debug, Hash, Serialize)]
pub struct PostListItem {
    pub id: String,
    pub title: String,
    pub body: String,
    pub created_at: String,
}

#[derive(Clone, Eq, PartialEq, Debug, Default, Hash, Serialize)]
pub struct PostListView {
    pub posts: Vec<PostListItem>,
}

impl PostListView {
    pub fn new(posts: &[Post]) -> Result<Self, time::error::Format> {
        let posts = posts
            .iter()
            .map(|post| {
                Ok(PostListItem {
                    id: post.id.to_string(),
                    title: post.content.title.clone(),
                    body: post.content.body.clone(),
                    created_at: post.created_at.format(CREATED_AT_FORMAT)?,
                })
            })
            .collect::<Result<_, time::error::Format>>()?;

        Ok(Self { posts })
    }
}

impl View for PostListView {
    const TEMPLATE: &'static str = "posts/index.html";

    fn context(&self) -> Value {
        Value::from_serialize(self)
    }
}

#[derive(Clone, Eq, PartialEq, Debug, Hash, Serialize)]
pub struct FibonacciView {
    pub number: Option<u32>,
    pub result: Option<u64>,
    pub error: Option<String>,
    pub max_input: u32,
}

impl FibonacciView {
    #[must_use]
    pub fn empty() -> Self {
        Self {
            number: None,
            result: None,
            error: None,
            max_input: MAX_FIBONACCI_INPUT,
        }
    }

    #[must_use]
    pub fn with_result(number: u32, result: u64) -> Self {
        Self {
            number: Some(number),
            result: Some(result),
            ..Self::empty()
        }
    }

    #[must_use]
    pub fn with_error(error: FibonacciInputError) -> Self {
        Self {
            error: Some(error.to_string()),
            ..Self::empty()
        }
    }
}

impl View for FibonacciView {
    const TEMPLATE: &'static str = "fibonacci/index.html";

    fn context(&self) -> Value {
        Value::from_serialize(self)
    }
}

#[derive(Clone, Eq, PartialEq, Debug, Default, Hash)]
pub struct HackableView {
    pub message: Option<UnescapedHtml>,
}

impl View for HackableView {
    const TEMPLATE: &'static str = "hackable/index.html";

    fn context(&self) -> Value {
        context! { message => self.message.clone().map(Value::from) }
    }
}
