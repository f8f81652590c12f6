//! Screen addressing.
//!
//! Every screen has a path in the same grammar the web console used
//! (`/functions/{id}/versions`, `/executions/{id}` and so on), so routes can
//! be passed on the command line and round-trip through [`Route::parse`] and
//! [`Route::path`].

use std::fmt;

/// Segment that means "create" where a function id would go
const NEW_SEGMENT: &str = "new";

/// A screen of the console
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash)]
pub enum Route {
    Login,
    #[default]
    FunctionsList,
    FunctionCreate,
    FunctionCode { id: String },
    FunctionVersions { id: String },
    FunctionExecutions { id: String },
    FunctionSettings { id: String },
    FunctionTest { id: String },
    VersionDiff { id: String, old: u32, new: u32 },
    ExecutionDetail { id: String },
    Preview { component: Option<String> },
}

/// Tabs shown on every per-function screen
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FunctionTab {
    Code,
    Versions,
    Executions,
    Settings,
    Test,
}

impl FunctionTab {
    pub const ALL: [FunctionTab; 5] = [
        FunctionTab::Code,
        FunctionTab::Versions,
        FunctionTab::Executions,
        FunctionTab::Settings,
        FunctionTab::Test,
    ];

    pub fn label(&self) -> &'static str {
        match self {
            FunctionTab::Code => "Code",
            FunctionTab::Versions => "Versions",
            FunctionTab::Executions => "Executions",
            FunctionTab::Settings => "Settings",
            FunctionTab::Test => "Test",
        }
    }

    pub fn index(&self) -> usize {
        Self::ALL.iter().position(|t| t == self).unwrap_or(0)
    }

    pub fn route(&self, id: &str) -> Route {
        let id = id.to_string();
        match self {
            FunctionTab::Code => Route::FunctionCode { id },
            FunctionTab::Versions => Route::FunctionVersions { id },
            FunctionTab::Executions => Route::FunctionExecutions { id },
            FunctionTab::Settings => Route::FunctionSettings { id },
            FunctionTab::Test => Route::FunctionTest { id },
        }
    }
}

impl Route {
    /// Parse a path such as `/functions/abc/versions`.
    ///
    /// A leading `#!` or `#` is accepted. Unknown paths yield `None`.
    pub fn parse(input: &str) -> Option<Route> {
        let path = input.trim();
        let path = path
            .strip_prefix("#!")
            .or_else(|| path.strip_prefix('#'))
            .unwrap_or(path);
        let rest = path.strip_prefix('/')?;
        let segments: Vec<&str> = rest.split('/').collect();
        if segments.iter().any(|s| s.is_empty()) {
            return None;
        }

        let route = match segments.as_slice() {
            ["login"] => Route::Login,
            ["functions"] => Route::FunctionsList,
            ["functions", NEW_SEGMENT] => Route::FunctionCreate,
            ["functions", id] | ["functions", id, "code"] => {
                Route::FunctionCode { id: id.to_string() }
            }
            ["functions", id, "versions"] => Route::FunctionVersions { id: id.to_string() },
            ["functions", id, "executions"] => Route::FunctionExecutions { id: id.to_string() },
            ["functions", id, "settings"] => Route::FunctionSettings { id: id.to_string() },
            ["functions", id, "test"] => Route::FunctionTest { id: id.to_string() },
            ["functions", id, "diff", old, new] => Route::VersionDiff {
                id: id.to_string(),
                old: old.parse().ok()?,
                new: new.parse().ok()?,
            },
            ["executions", id] => Route::ExecutionDetail { id: id.to_string() },
            ["preview"] => Route::Preview { component: None },
            ["preview", component] => Route::Preview {
                component: Some(component.to_string()),
            },
            _ => return None,
        };
        Some(route)
    }

    /// Path for this route; the inverse of [`Route::parse`]
    pub fn path(&self) -> String {
        match self {
            Route::Login => "/login".to_string(),
            Route::FunctionsList => "/functions".to_string(),
            Route::FunctionCreate => format!("/functions/{NEW_SEGMENT}"),
            // The short form of an id spelled "new" would parse as create
            Route::FunctionCode { id } if id == NEW_SEGMENT => format!("/functions/{id}/code"),
            Route::FunctionCode { id } => format!("/functions/{id}"),
            Route::FunctionVersions { id } => format!("/functions/{id}/versions"),
            Route::FunctionExecutions { id } => format!("/functions/{id}/executions"),
            Route::FunctionSettings { id } => format!("/functions/{id}/settings"),
            Route::FunctionTest { id } => format!("/functions/{id}/test"),
            Route::VersionDiff { id, old, new } => format!("/functions/{id}/diff/{old}/{new}"),
            Route::ExecutionDetail { id } => format!("/executions/{id}"),
            Route::Preview { component: None } => "/preview".to_string(),
            Route::Preview {
                component: Some(component),
            } => format!("/preview/{component}"),
        }
    }

    /// Function the screen belongs to, for per-function screens
    pub fn function_id(&self) -> Option<&str> {
        match self {
            Route::FunctionCode { id }
            | Route::FunctionVersions { id }
            | Route::FunctionExecutions { id }
            | Route::FunctionSettings { id }
            | Route::FunctionTest { id }
            | Route::VersionDiff { id, .. } => Some(id),
            _ => None,
        }
    }

    /// Tab highlighted in the function tab bar
    pub fn function_tab(&self) -> Option<FunctionTab> {
        match self {
            Route::FunctionCode { .. } => Some(FunctionTab::Code),
            Route::FunctionVersions { .. } => Some(FunctionTab::Versions),
            Route::FunctionExecutions { .. } => Some(FunctionTab::Executions),
            Route::FunctionSettings { .. } => Some(FunctionTab::Settings),
            Route::FunctionTest { .. } => Some(FunctionTab::Test),
            _ => None,
        }
    }

    /// The tab bar for a function
    pub fn function_tabs(id: &str) -> Vec<(FunctionTab, Route)> {
        FunctionTab::ALL
            .iter()
            .map(|tab| (*tab, tab.route(id)))
            .collect()
    }

    /// Target of the back action.
    ///
    /// An execution only knows its function once loaded, so the caller
    /// passes it in; without it the functions list is used.
    pub fn back(&self, execution_function: Option<&str>) -> Option<Route> {
        match self {
            Route::Login | Route::FunctionsList => None,
            Route::FunctionCreate
            | Route::FunctionCode { .. }
            | Route::FunctionVersions { .. }
            | Route::FunctionExecutions { .. }
            | Route::FunctionSettings { .. }
            | Route::FunctionTest { .. } => Some(Route::FunctionsList),
            Route::VersionDiff { id, .. } => Some(Route::FunctionCode { id: id.clone() }),
            Route::ExecutionDetail { .. } => Some(match execution_function {
                Some(id) => Route::FunctionExecutions { id: id.to_string() },
                None => Route::FunctionsList,
            }),
            Route::Preview { component: Some(_) } => Some(Route::Preview { component: None }),
            Route::Preview { component: None } => Some(Route::FunctionsList),
        }
    }

    /// Header trail, outermost first
    pub fn breadcrumb(&self) -> Vec<String> {
        match self {
            Route::Login => vec!["Login".into()],
            Route::FunctionsList => vec!["Functions".into()],
            Route::FunctionCreate => vec!["Functions".into(), "New".into()],
            Route::VersionDiff { id, old, new } => vec![
                "Functions".into(),
                id.clone(),
                format!("Diff v{old} → v{new}"),
            ],
            Route::ExecutionDetail { id } => vec!["Executions".into(), id.clone()],
            Route::Preview { component } => {
                let mut trail = vec!["Preview".to_string()];
                trail.extend(component.clone());
                trail
            }
            _ => {
                let id = self.function_id().unwrap_or_default().to_string();
                let tab = self.function_tab().map(|t| t.label()).unwrap_or_default();
                vec!["Functions".into(), id, tab.into()]
            }
        }
    }

    /// Screens reachable without a session
    pub fn is_public(&self) -> bool {
        matches!(self, Route::Login | Route::Preview { .. })
    }
}

impl fmt::Display for Route {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.path())
    }
}
