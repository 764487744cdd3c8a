//! Shared UI themes and Tailwind class constants to ensure visual consistency
//! across the forms.

pub struct Theme;

impl Theme {
    /// Full-height page section that centers the form card.
    pub const PAGE: &'static str =
        "w-full min-h-screen h-full flex justify-center items-center bg-gray-50";

    /// White card wrapping a form.
    pub const CARD: &'static str =
        "sm:w-[500px] w-[90%] h-auto p-8 shadow-lg border border-gray-200 rounded-xl bg-white";

    pub const LABEL: &'static str =
        "text-sm font-medium leading-none text-gray-700 peer-disabled:cursor-not-allowed peer-disabled:opacity-70";

    pub const INPUT: &'static str = "flex h-9 w-full rounded-md border border-gray-200 bg-transparent px-3 py-1 text-base shadow-sm transition-colors placeholder:text-gray-400 focus:outline-none focus-visible:ring-1 focus-visible:ring-gray-400 md:text-sm";

    /// Native file picker; styled separately since it does not share the text input box model.
    pub const FILE_INPUT: &'static str = "focus:outline-none border p-2 rounded w-full";

    /// Inline validation message under a field.
    pub const FIELD_ERROR: &'static str = "text-red-500 text-sm";

    pub const BUTTON: &'static str = "w-full cursor-pointer inline-flex items-center justify-center rounded-md bg-blue-700 px-4 py-2 text-sm font-medium text-white shadow hover:bg-blue-700/90 focus-visible:outline-none focus-visible:ring-1 focus-visible:ring-blue-300";

    pub const LINK: &'static str = "text-blue-700 hover:underline font-medium";
}

/// Appends caller-supplied classes to a component's base classes.
pub fn classes(base: &str, extra: Option<&str>) -> String {
    match extra.map(str::trim) {
        Some(extra) if !extra.is_empty() => format!("{base} {extra}"),
        _ => base.to_string(),
    }
}
