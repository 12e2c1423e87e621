use serde::{Deserialize, Serialize};

/// Query parameters of the "view full program" link
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ProgramQuery {
    pub day: String,
    pub lang: String,
}

impl ProgramQuery {
    /// URL-encoded `day=..&lang=..`
    pub fn to_query_string(&self) -> String {
        format!(
            "day={}&lang={}",
            urlencoding::encode(&self.day),
            urlencoding::encode(&self.lang)
        )
    }

    /// Append the query to `base`, respecting an existing query string
    pub fn to_url(&self, base: &str) -> String {
        let separator = if base.contains('?') { '&' } else { '?' };
        format!("{}{}{}", base, separator, self.to_query_string())
    }
}

/// Map a day identifier and locale to the program page query. No side effects.
pub fn program_query(day: &str, locale: &str) -> ProgramQuery {
    ProgramQuery {
        day: day.to_string(),
        lang: locale.to_string(),
    }
}
