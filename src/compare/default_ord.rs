use std::borrow::Cow;
use std::cmp::Ordering;
use std::rc::Rc;
use std::sync::Arc;
use std::time::SystemTime;

use super::Comparator;

/// The comparator used by the collections whenever the caller doesn't supply one.
///
/// See the [module documentation](super) for the tiers this trait resolves to. The tiers are
/// mutually exclusive per type, so a type never has to choose between them at runtime.
///
/// Shared handles ([`Rc`], [`Arc`]) are transparent: they compare like the value they point to, so
/// a handle to a [`Comparator`] still uses its comparator. Wrap handles in
/// [`ByIdentity`](super::ByIdentity) to compare them as distinct instances instead.
pub trait DefaultOrd {
    fn default_cmp(&self, other: &Self) -> Ordering;

    /// Returns true if [`default_cmp`](DefaultOrd::default_cmp) considers both values equal.
    fn default_eq(&self, other: &Self) -> bool {
        self.default_cmp(other) == Ordering::Equal
    }
}

macro_rules! impl_native_ord {
    ($($t:ty),* $(,)?) => {
        $(
            impl DefaultOrd for $t {
                fn default_cmp(&self, other: &Self) -> Ordering {
                    self.cmp(other)
                }
            }
        )*
    };
}

impl_native_ord!(
    i8, i16, i32, i64, i128, isize,
    u8, u16, u32, u64, u128, usize,
    bool, char, (), str, String,
);

impl DefaultOrd for f32 {
    fn default_cmp(&self, other: &Self) -> Ordering {
        self.total_cmp(other)
    }
}

impl DefaultOrd for f64 {
    fn default_cmp(&self, other: &Self) -> Ordering {
        self.total_cmp(other)
    }
}

impl DefaultOrd for Cow<'_, str> {
    fn default_cmp(&self, other: &Self) -> Ordering {
        self.as_ref().cmp(other.as_ref())
    }
}

impl<T: DefaultOrd> DefaultOrd for Option<T> {
    fn default_cmp(&self, other: &Self) -> Ordering {
        match (self, other) {
            (Some(lhs), Some(rhs)) => lhs.default_cmp(rhs),
            (None, None) => Ordering::Equal,
            (None, Some(_)) => Ordering::Less,
            (Some(_), None) => Ordering::Greater,
        }
    }
}

impl<T: DefaultOrd> DefaultOrd for Vec<T> {
    fn default_cmp(&self, other: &Self) -> Ordering {
        for (lhs, rhs) in self.iter().zip(other.iter()) {
            match lhs.default_cmp(rhs) {
                Ordering::Equal => continue,
                non_eq => return non_eq,
            }
        }
        self.len().cmp(&other.len())
    }
}

impl DefaultOrd for SystemTime {
    fn default_cmp(&self, other: &Self) -> Ordering {
        self.cmp(other)
    }
}

#[cfg(feature = "chrono")]
mod chrono_impls {
    use std::cmp::Ordering;

    use chrono::{DateTime, NaiveDate, NaiveDateTime, NaiveTime, TimeZone};

    use super::DefaultOrd;

    impl<Tz: TimeZone> DefaultOrd for DateTime<Tz> {
        fn default_cmp(&self, other: &Self) -> Ordering {
            self.cmp(other)
        }
    }

    impl DefaultOrd for NaiveDateTime {
        fn default_cmp(&self, other: &Self) -> Ordering {
            self.cmp(other)
        }
    }

    impl DefaultOrd for NaiveDate {
        fn default_cmp(&self, other: &Self) -> Ordering {
            self.cmp(other)
        }
    }

    impl DefaultOrd for NaiveTime {
        fn default_cmp(&self, other: &Self) -> Ordering {
            self.cmp(other)
        }
    }
}

impl<T: Comparator> DefaultOrd for T {
    fn default_cmp(&self, other: &Self) -> Ordering {
        self.compare_with(other)
    }
}

impl<T: DefaultOrd + ?Sized> DefaultOrd for Rc<T> {
    fn default_cmp(&self, other: &Self) -> Ordering {
        T::default_cmp(self, other)
    }
}

impl<T: DefaultOrd + ?Sized> DefaultOrd for Arc<T> {
    fn default_cmp(&self, other: &Self) -> Ordering {
        T::default_cmp(self, other)
    }
}

/// Returns true if `cmp` considers `value` equal to any item of `others`.
///
/// Every candidate pair is compared: there is no hashing shortcut, so custom comparators that
/// only ever answer "equal or not" still behave correctly.
pub(crate) fn matches_any<'a, T, C>(
    value: &T,
    others: impl IntoIterator<Item = &'a T>,
    cmp: &mut C,
) -> bool
where
    T: 'a + ?Sized,
    C: FnMut(&T, &T) -> Ordering,
{
    others.into_iter().any(|other| cmp(value, other) == Ordering::Equal)
}
