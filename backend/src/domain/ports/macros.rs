//! Helper macro for declaring port error enums.
//!
//! Each variant gets a snake-case constructor whose fields accept anything
//! convertible into the declared type, so adapters can write
//! `RestaurantRepositoryError::query("boom")`.

macro_rules! define_port_error {
    (@ctor $variant:ident) => {
        ::paste::paste! {
            #[doc = concat!("Construct the `", stringify!($variant), "` variant.")]
            pub fn [<$variant:snake>]() -> Self {
                Self::$variant
            }
        }
    };

    (@ctor $variant:ident { $($field:ident : $ty:ty),* $(,)? }) => {
        define_port_error!(@ctor_impl $variant () () $( $field : $ty, )*);
    };

    (@ctor_impl $variant:ident ($($params:tt)*) ($($inits:tt)*) ) => {
        ::paste::paste! {
            #[doc = concat!("Construct the `", stringify!($variant), "` variant.")]
            pub fn [<$variant:snake>]($($params)*) -> Self {
                Self::$variant { $($inits)* }
            }
        }
    };

    (@ctor_impl $variant:ident ($($params:tt)*) ($($inits:tt)*) $field:ident : $ty:ty, $($rest:tt)*) => {
        define_port_error!(
            @ctor_impl
            $variant
            ($($params)* $field: impl Into<$ty>,)
            ($($inits)* $field: $field.into(),)
            $($rest)*
        );
    };

    (
        $(#[$outer:meta])*
        pub enum $name:ident {
            $(
                $(#[$variant_meta:meta])*
                $variant:ident $( { $($field:ident : $ty:ty),* $(,)? } )? => $message:expr
            ),* $(,)?
        }
    ) => {
        $(#[$outer])*
        #[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
        pub enum $name {
            $(
                $(#[$variant_meta])*
                #[error($message)]
                $variant $( { $($field : $ty),* } )?,
            )*
        }

        impl $name {
            $(
                define_port_error!(@ctor $variant $( { $($field : $ty),* } )?);
            )*
        }
    };
}

pub(crate) use define_port_error;

#[cfg(test)]
mod tests {
    use rstest::rstest;

    define_port_error! {
        pub enum MenuStoreError {
            Unreachable => "menu store unreachable",
            Duplicate { name: String } => "menu item {name} already exists",
            Locked { name: String, owner: String } => "menu item {name} is locked by {owner}",
        }
    }

    #[rstest]
    fn unit_variants_get_constructors() {
        assert_eq!(MenuStoreError::unreachable(), MenuStoreError::Unreachable);
    }

    #[rstest]
    #[case(MenuStoreError::duplicate("KFC"), "menu item KFC already exists")]
    #[case(
        MenuStoreError::locked("KFC", String::from("bob@name.com")),
        "menu item KFC is locked by bob@name.com"
    )]
    fn constructors_accept_anything_stringy(#[case] err: MenuStoreError, #[case] expected: &str) {
        assert_eq!(err.to_string(), expected);
    }
}
