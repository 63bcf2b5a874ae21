/// A value that may or may not be text.
///
/// Anything can be handed to the validator; only values that expose text can
/// ever be accepted. Everything else is rejected up front.
pub trait Candidate {
    /// The text to validate, or `None` when the value is not text
    fn as_text(&self) -> Option<&str>;
}

impl Candidate for str {
    fn as_text(&self) -> Option<&str> {
        Some(self)
    }
}

impl Candidate for String {
    fn as_text(&self) -> Option<&str> {
        Some(self.as_str())
    }
}

impl Candidate for std::borrow::Cow<'_, str> {
    fn as_text(&self) -> Option<&str> {
        Some(self.as_ref())
    }
}

impl<T: Candidate + ?Sized> Candidate for &T {
    fn as_text(&self) -> Option<&str> {
        (**self).as_text()
    }
}

impl<T: Candidate> Candidate for Option<T> {
    fn as_text(&self) -> Option<&str> {
        self.as_ref().and_then(Candidate::as_text)
    }
}

impl Candidate for serde_json::Value {
    fn as_text(&self) -> Option<&str> {
        self.as_str()
    }
}

impl Candidate for () {
    fn as_text(&self) -> Option<&str> {
        None
    }
}

macro_rules! not_text {
    ($($ty:ty),* $(,)?) => {
        $(
            impl Candidate for $ty {
                fn as_text(&self) -> Option<&str> {
                    None
                }
            }
        )*
    };
}

not_text!(bool, char, i8, i16, i32, i64, i128, isize, u8, u16, u32, u64, u128, usize, f32, f64);

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_text_values() {
        assert_eq!("a@b.co".as_text(), Some("a@b.co"));
        assert_eq!(String::from("x").as_text(), Some("x"));
        assert_eq!(Some("y").as_text(), Some("y"));
        assert_eq!(json!("z").as_text(), Some("z"));
    }

    #[test]
    fn test_non_text_values() {
        assert_eq!(None::<&str>.as_text(), None);
        assert_eq!(123i32.as_text(), None);
        assert_eq!(4.5f64.as_text(), None);
        assert_eq!(true.as_text(), None);
        assert_eq!(().as_text(), None);
        assert_eq!(json!(null).as_text(), None);
        assert_eq!(json!({"email": "a@b.co"}).as_text(), None);
    }
}
