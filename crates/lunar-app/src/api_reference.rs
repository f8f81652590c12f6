//! Reference card for the Lua runtime shown beside the code editor

/// One callable exposed to function code
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ApiItem {
    pub name: &'static str,
    pub kind: &'static str,
    pub description: &'static str,
}

/// A module of the runtime, shown as one tab
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ApiSection {
    pub id: &'static str,
    pub name: &'static str,
    pub description: &'static str,
    pub items: &'static [ApiItem],
}

const fn function(name: &'static str, description: &'static str) -> ApiItem {
    ApiItem {
        name,
        kind: "function",
        description,
    }
}

/// Sections in tab order
pub const LUA_API_SECTIONS: [ApiSection; 4] = [
    ApiSection {
        id: "http",
        name: "HTTP",
        description: "HTTP client for making web requests",
        items: &[
            function("http.get(url, opts)", "Perform GET request"),
            function("http.post(url, body, opts)", "Perform POST request"),
            function("http.put(url, body, opts)", "Perform PUT request"),
            function("http.delete(url, opts)", "Perform DELETE request"),
        ],
    },
    ApiSection {
        id: "log",
        name: "Log",
        description: "Logging utilities for debugging",
        items: &[
            function("log.info(msg)", "Log info message"),
            function("log.error(msg)", "Log error message"),
            function("log.warn(msg)", "Log warning message"),
            function("log.debug(msg)", "Log debug message"),
        ],
    },
    ApiSection {
        id: "env",
        name: "Env",
        description: "Environment variable management",
        items: &[
            function("env.get(key)", "Get environment variable"),
            function("env.set(key, value)", "Set environment variable"),
            function("env.delete(key)", "Delete environment variable"),
        ],
    },
    ApiSection {
        id: "json",
        name: "JSON",
        description: "JSON encoding and decoding",
        items: &[
            function("json.encode(value)", "Encode value to JSON string"),
            function("json.decode(str)", "Decode JSON string to value"),
        ],
    },
];

/// Section for a tab index, wrapping past either end
pub fn section(index: usize) -> &'static ApiSection {
    &LUA_API_SECTIONS[index % LUA_API_SECTIONS.len()]
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_section_ids_are_unique() {
        for (i, a) in LUA_API_SECTIONS.iter().enumerate() {
            for b in &LUA_API_SECTIONS[i + 1..] {
                assert_ne!(a.id, b.id);
            }
        }
    }

    #[test]
    fn test_items_are_prefixed_by_module() {
        for s in &LUA_API_SECTIONS {
            assert!(!s.items.is_empty());
            for item in s.items {
                assert!(item.name.starts_with(&format!("{}.", s.id)), "{}", item.name);
            }
        }
    }

    #[test]
    fn test_section_wraps() {
        assert_eq!(section(0).id, "http");
        assert_eq!(section(5).id, "log");
    }
}
