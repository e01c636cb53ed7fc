//! The two-symbol alphabet observations are drawn from.

use std::fmt;

/// One binary observation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum Label {
    Zero,
    One,
}

impl fmt::Display for Label {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Label::Zero => f.write_str("0"),
            Label::One => f.write_str("1"),
        }
    }
}

/// Values that may reduce to a [`Label`].
///
/// A value reduces to a label when its textual form is exactly `"0"` or
/// `"1"`, so `0u8`, `1i64`, `'0'` and `"1"` all qualify while `2`, `"01"`
/// and `"yes"` do not. Booleans map `false` to zero and `true` to one.
pub trait ToLabel: fmt::Debug {
    fn to_label(&self) -> Option<Label>;
}

impl ToLabel for Label {
    fn to_label(&self) -> Option<Label> {
        Some(*self)
    }
}

impl ToLabel for bool {
    fn to_label(&self) -> Option<Label> {
        Some(if *self { Label::One } else { Label::Zero })
    }
}

macro_rules! impl_to_label_int {
    ($($t:ty),*) => {
        $(
            impl ToLabel for $t {
                fn to_label(&self) -> Option<Label> {
                    match *self {
                        0 => Some(Label::Zero),
                        1 => Some(Label::One),
                        _ => None,
                    }
                }
            }
        )*
    };
}

impl_to_label_int!(u8, u16, u32, u64, usize, i8, i16, i32, i64, isize);

impl ToLabel for char {
    fn to_label(&self) -> Option<Label> {
        match self {
            '0' => Some(Label::Zero),
            '1' => Some(Label::One),
            _ => None,
        }
    }
}

impl ToLabel for str {
    fn to_label(&self) -> Option<Label> {
        match self {
            "0" => Some(Label::Zero),
            "1" => Some(Label::One),
            _ => None,
        }
    }
}

impl ToLabel for String {
    fn to_label(&self) -> Option<Label> {
        self.as_str().to_label()
    }
}

impl<T: ToLabel + ?Sized> ToLabel for &T {
    fn to_label(&self) -> Option<Label> {
        (**self).to_label()
    }
}
