// File: src/macros.rs
// Purpose: Model literal macro

/// Builds a [`Model`](crate::Model) from `field => value` pairs.
///
/// ```
/// use model_validator_rules::{model, Value};
///
/// let defaults = model! {
///     "name" => "",
///     "code" => 1,
///     "isActive" => false,
/// };
/// assert_eq!(defaults["code"], Value::Number(1.0));
/// ```
#[macro_export]
macro_rules! model {
    () => {
        $crate::Model::new()
    };

    ( $($key:expr => $value:expr),+ $(,)? ) => {{
        let mut model = $crate::Model::new();
        $(
            model.insert(::std::string::String::from($key), $crate::Value::from($value));
        )+
        model
    }};
}
