//! Default textual rendering of values handed to [`Component::render`].
//!
//! [`Component::render`]: crate::Component::render

use serde_json::Value;
use std::borrow::Cow;
use std::fmt::Display;
use std::path::{Path, PathBuf};

/// Textual form of an absent value.
pub(crate) const ABSENT: &str = "None";

/// A value with a default textual rendering.
///
/// Strings render bare, `None` and JSON `null` render as `None`, and scalars
/// use their `Display` form (non-finite floats stay `NaN`/`inf`). Types that
/// only implement `Display` can be passed through [`Displayed`].
pub trait Render {
    fn render_text(&self) -> Cow<'_, str>;
}

macro_rules! render_via_display {
    ($($ty:ty),* $(,)?) => {
        $(
            impl Render for $ty {
                fn render_text(&self) -> Cow<'_, str> {
                    Cow::Owned(self.to_string())
                }
            }
        )*
    };
}

render_via_display!(
    i8, i16, i32, i64, i128, isize, u8, u16, u32, u64, u128, usize, f32, f64, bool, char,
);

impl Render for str {
    fn render_text(&self) -> Cow<'_, str> {
        Cow::Borrowed(self)
    }
}

impl Render for String {
    fn render_text(&self) -> Cow<'_, str> {
        Cow::Borrowed(self.as_str())
    }
}

impl Render for Path {
    fn render_text(&self) -> Cow<'_, str> {
        self.to_string_lossy()
    }
}

impl Render for PathBuf {
    fn render_text(&self) -> Cow<'_, str> {
        self.as_path().render_text()
    }
}

/// Arrays and objects render as compact JSON.
impl Render for Value {
    fn render_text(&self) -> Cow<'_, str> {
        match self {
            Value::Null => Cow::Borrowed(ABSENT),
            Value::String(s) => Cow::Borrowed(s.as_str()),
            other => Cow::Owned(other.to_string()),
        }
    }
}

impl<T: Render> Render for Option<T> {
    fn render_text(&self) -> Cow<'_, str> {
        match self {
            Some(value) => value.render_text(),
            None => Cow::Borrowed(ABSENT),
        }
    }
}

impl<T: Render + ?Sized> Render for &T {
    fn render_text(&self) -> Cow<'_, str> {
        (**self).render_text()
    }
}

/// Adapter rendering any `Display` type through its `Display` impl.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Displayed<T>(pub T);

impl<T: Display> Render for Displayed<T> {
    fn render_text(&self) -> Cow<'_, str> {
        Cow::Owned(self.0.to_string())
    }
}
