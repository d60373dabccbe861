//! The [`validator!`] macro: struct, `Validate` impl and factory function
//! from one declaration.
//!
//! ```rust,ignore
//! // Unit rule
//! validator! {
//!     pub OnlyEmoji for str;
//!     rule(input) { text::only_emoji(input) }
//!     error(input) { ValidationError::new("only_emoji", "Text must contain only emoji") }
//!     fn only_emoji();
//! }
//!
//! // Rule with fields and a hand-written constructor
//! validator! {
//!     #[derive(Copy, PartialEq, Eq, Hash)]
//!     pub NonEmpty { trim_whitespace: bool } for str;
//!     rule(self, input) { text::is_non_empty(input, self.trim_whitespace) }
//!     error(self, input) { ValidationError::new("non_empty", "Text must not be empty") }
//!     new(trim_whitespace: bool) { Self { trim_whitespace } }
//!     fn non_empty(trim_whitespace: bool);
//! }
//!
//! // Rule generic over a number type, no fields
//! validator! {
//!     pub Prime<N: Numeric> for N;
//!     rule(input) { number::is_prime(*input) }
//!     error(input) { ValidationError::new("prime", "Value must be prime") }
//!     fn prime();
//! }
//! ```

/// Declares a rule object.
///
/// `#[derive(Debug, Clone)]` is always applied; unit and phantom rules also
/// get `Copy, Default, PartialEq, Eq, Hash`. Extra derives go in `#[derive(...)]`.
///
/// Shapes, in match order:
///
/// 1. `pub Name for Input;` unit struct.
/// 2. `pub Name { field: Ty, .. } for Input;` with `new(..) { .. }`, or
///    `new(..) -> ErrorTy { .. }` plus `fn factory(..) -> ErrorTy;` for a
///    fallible constructor.
/// 3. `pub Name<T: Bound> { field: Ty, .. } for Input;` with an automatic
///    `new` taking every field.
/// 4. `pub Name<T: Bound> for Input;` zero-sized, generic through
///    `PhantomData<T>`.
///
/// Each shape optionally ends with `fn factory(..);` to emit a free
/// constructor function.
#[macro_export]
macro_rules! validator {
    // ── Shared Validate impl for non-generic structs with fields ──────────
    (@impl $name:ident, $input:ty, $self_:ident, $inp:ident, $rule:block, $self2:ident, $einp:ident, $err:block) => {
        impl $crate::foundation::Validate for $name {
            type Input = $input;

            #[allow(unused_variables)]
            fn validate(&$self_, $inp: &Self::Input) -> Result<(), $crate::foundation::ValidationError> {
                if $rule {
                    Ok(())
                } else {
                    let $einp = $inp;
                    Err($err)
                }
            }
        }
    };

    // ── Unit rule + factory fn ────────────────────────────────────────────
    (
        $(#[$meta:meta])*
        $vis:vis $name:ident for $input:ty;
        rule($inp:ident) $rule:block
        error($einp:ident) $err:block
        fn $factory:ident();
    ) => {
        $crate::validator! {
            $(#[$meta])*
            $vis $name for $input;
            rule($inp) $rule
            error($einp) $err
        }

        #[must_use]
        $vis const fn $factory() -> $name { $name }
    };

    // ── Unit rule ─────────────────────────────────────────────────────────
    (
        $(#[$meta:meta])*
        $vis:vis $name:ident for $input:ty;
        rule($inp:ident) $rule:block
        error($einp:ident) $err:block
    ) => {
        $(#[$meta])*
        #[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
        $vis struct $name;

        impl $crate::foundation::Validate for $name {
            type Input = $input;

            #[allow(unused_variables)]
            fn validate(&self, $inp: &Self::Input) -> Result<(), $crate::foundation::ValidationError> {
                if $rule {
                    Ok(())
                } else {
                    let $einp = $inp;
                    Err($err)
                }
            }
        }
    };

    // ── Fields + fallible new + fallible factory ──────────────────────────
    (
        $(#[$meta:meta])*
        $vis:vis $name:ident { $($field:ident: $fty:ty),+ $(,)? } for $input:ty;
        rule($self_:ident, $inp:ident) $rule:block
        error($self2:ident, $einp:ident) $err:block
        new($($narg:ident: $naty:ty),* $(,)?) -> $ety:ty $new_body:block
        fn $factory:ident($($farg:ident: $faty:ty),* $(,)?) -> $fety:ty;
    ) => {
        $(#[$meta])*
        #[derive(Debug, Clone)]
        $vis struct $name {
            $(pub $field: $fty,)+
        }

        impl $name {
            /// Creates the rule, failing if its configuration is invalid.
            pub fn new($($narg: $naty),*) -> Result<Self, $ety> $new_body
        }

        $crate::validator!(@impl $name, $input, $self_, $inp, $rule, $self2, $einp, $err);

        $vis fn $factory($($farg: $faty),*) -> Result<$name, $fety> {
            $name::new($($farg),*)
        }
    };

    // ── Fields + custom new + factory fn ──────────────────────────────────
    (
        $(#[$meta:meta])*
        $vis:vis $name:ident { $($field:ident: $fty:ty),+ $(,)? } for $input:ty;
        rule($self_:ident, $inp:ident) $rule:block
        error($self2:ident, $einp:ident) $err:block
        new($($narg:ident: $naty:ty),* $(,)?) $new_body:block
        fn $factory:ident($($farg:ident: $faty:ty),* $(,)?);
    ) => {
        $crate::validator! {
            $(#[$meta])*
            $vis $name { $($field: $fty),+ } for $input;
            rule($self_, $inp) $rule
            error($self2, $einp) $err
            new($($narg: $naty),*) $new_body
        }

        #[must_use]
        $vis fn $factory($($farg: $faty),*) -> $name {
            $name::new($($farg),*)
        }
    };

    // ── Fields + custom new ───────────────────────────────────────────────
    (
        $(#[$meta:meta])*
        $vis:vis $name:ident { $($field:ident: $fty:ty),+ $(,)? } for $input:ty;
        rule($self_:ident, $inp:ident) $rule:block
        error($self2:ident, $einp:ident) $err:block
        new($($narg:ident: $naty:ty),* $(,)?) $new_body:block
    ) => {
        $(#[$meta])*
        #[derive(Debug, Clone)]
        $vis struct $name {
            $(pub $field: $fty,)+
        }

        impl $name {
            /// Creates the rule.
            #[must_use]
            pub fn new($($narg: $naty),*) -> Self $new_body
        }

        $crate::validator!(@impl $name, $input, $self_, $inp, $rule, $self2, $einp, $err);
    };

    // ── Generic fields + auto new + factory fn ────────────────────────────
    (
        $(#[$meta:meta])*
        $vis:vis $name:ident<$param:ident: $bound:ident>
            { $($field:ident: $fty:ty),+ $(,)? } for $input:ty;
        rule($self_:ident, $inp:ident) $rule:block
        error($self2:ident, $einp:ident) $err:block
        fn $factory:ident($($farg:ident: $faty:ty),* $(,)?);
    ) => {
        $(#[$meta])*
        #[derive(Debug, Clone)]
        $vis struct $name<$param> {
            $(pub $field: $fty,)+
        }

        impl<$param: $bound> $name<$param> {
            /// Creates the rule.
            #[must_use]
            pub fn new($($field: $fty),+) -> Self {
                Self { $($field),+ }
            }
        }

        impl<$param: $bound> $crate::foundation::Validate for $name<$param> {
            type Input = $input;

            #[allow(unused_variables)]
            fn validate(&$self_, $inp: &Self::Input) -> Result<(), $crate::foundation::ValidationError> {
                if $rule {
                    Ok(())
                } else {
                    let $einp = $inp;
                    Err($err)
                }
            }
        }

        #[must_use]
        $vis fn $factory<$param: $bound>($($farg: $faty),*) -> $name<$param> {
            $name::new($($farg),*)
        }
    };

    // ── Phantom generic + factory fn ──────────────────────────────────────
    (
        $(#[$meta:meta])*
        $vis:vis $name:ident<$param:ident: $bound:ident> for $input:ty;
        rule($inp:ident) $rule:block
        error($einp:ident) $err:block
        fn $factory:ident();
    ) => {
        $(#[$meta])*
        #[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
        $vis struct $name<$param> {
            _phantom: ::std::marker::PhantomData<$param>,
        }

        impl<$param: $bound> $crate::foundation::Validate for $name<$param> {
            type Input = $input;

            #[allow(unused_variables)]
            fn validate(&self, $inp: &Self::Input) -> Result<(), $crate::foundation::ValidationError> {
                if $rule {
                    Ok(())
                } else {
                    let $einp = $inp;
                    Err($err)
                }
            }
        }

        #[must_use]
        $vis const fn $factory<$param: $bound>() -> $name<$param> {
            $name { _phantom: ::std::marker::PhantomData }
        }
    };
}
