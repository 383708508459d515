// src/macros.rs
#[macro_export]
macro_rules! s {
    // String shorthand!

    // Zero-arg → String::new()
    () => {
        ::std::string::String::new()
    };
    // Any single expression: literals, consts, &str vars
    ($expr:expr) => {
        ::std::string::String::from($expr)
    };
}

#[macro_export]
macro_rules! join {
    // String-type concatenation shorthand!
    ($first:expr $(, $rest:expr)+ $(,)?) => {{
        let mut s = ::std::string::String::from($first);
        $(
            s.push_str($rest);
        )+
        s
    }};
}

/// Build a `RowRecord` inline: `record! { "nick" => "Ana", "matches" => "5" }`.
#[macro_export]
macro_rules! record {
    () => {
        $crate::record::RowRecord::default()
    };
    ($($key:expr => $value:expr),+ $(,)?) => {
        <$crate::record::RowRecord as ::std::iter::FromIterator<(::std::string::String, ::std::string::String)>>::from_iter([
            $( (::std::string::String::from($key), ::std::string::String::from($value)) ),+
        ])
    };
}
