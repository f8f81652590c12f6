//! Backend calls issued by `update()` and the results that come back.
//!
//! A request never runs inside `update()`. It is returned as part of an
//! [`UpdateAction`](crate::UpdateAction), executed on a tokio task, and its
//! result re-enters the loop as `Message::Api` carrying the same [`Ticket`].

use lunar_api::{ApiResult, FunctionPatch, InvokeRequest, InvokeResponse, NewFunction};
use lunar_core::{
    EnvVars, Execution, ExecutionList, Function, FunctionList, LogList, VersionDiff, VersionList,
};

use crate::pagination::PageState;

/// Which generation counter a response is checked against
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TicketScope {
    /// The current screen; bumped on every navigation
    View,
    /// The command palette; bumped on every open
    Palette,
}

/// Stamp used to drop responses that outlived the screen that asked for them
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Ticket {
    pub scope: TicketScope,
    pub generation: u64,
}

impl Ticket {
    pub fn view(generation: u64) -> Self {
        Self {
            scope: TicketScope::View,
            generation,
        }
    }

    pub fn palette(generation: u64) -> Self {
        Self {
            scope: TicketScope::Palette,
            generation,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ApiRequest {
    Login { api_key: String },
    Logout,
    ListFunctions { limit: u64, offset: u64 },
    GetFunction { id: String },
    CreateFunction(NewFunction),
    UpdateFunction { id: String, patch: FunctionPatch },
    DeleteFunction { id: String },
    UpdateEnv { id: String, env_vars: EnvVars },
    ListVersions { id: String, limit: u64, offset: u64 },
    ActivateVersion { id: String, version: u32 },
    DiffVersions { id: String, old: u32, new: u32 },
    ListExecutions { id: String, limit: u64, offset: u64 },
    GetExecution { id: String },
    ExecutionLogs { id: String, limit: u64, offset: u64 },
    Invoke { id: String, request: InvokeRequest },
}

impl ApiRequest {
    /// Short name for logs
    pub fn name(&self) -> &'static str {
        match self {
            ApiRequest::Login { .. } => "login",
            ApiRequest::Logout => "logout",
            ApiRequest::ListFunctions { .. } => "list_functions",
            ApiRequest::GetFunction { .. } => "get_function",
            ApiRequest::CreateFunction(_) => "create_function",
            ApiRequest::UpdateFunction { .. } => "update_function",
            ApiRequest::DeleteFunction { .. } => "delete_function",
            ApiRequest::UpdateEnv { .. } => "update_env",
            ApiRequest::ListVersions { .. } => "list_versions",
            ApiRequest::ActivateVersion { .. } => "activate_version",
            ApiRequest::DiffVersions { .. } => "diff_versions",
            ApiRequest::ListExecutions { .. } => "list_executions",
            ApiRequest::GetExecution { .. } => "get_execution",
            ApiRequest::ExecutionLogs { .. } => "execution_logs",
            ApiRequest::Invoke { .. } => "invoke",
        }
    }
}

/// A request paired with the ticket its response must present
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ApiCall {
    pub ticket: Ticket,
    pub request: ApiRequest,
}

/// Result of one [`ApiRequest`], tagged by operation.
///
/// List results carry the page they were requested for, so a screen can
/// ignore a page it has already moved away from.
#[derive(Debug, Clone)]
pub enum ApiResponse {
    LoggedIn(ApiResult<()>),
    LoggedOut(ApiResult<()>),
    Functions {
        page: PageState,
        result: ApiResult<FunctionList>,
    },
    Function(ApiResult<Function>),
    FunctionCreated(ApiResult<()>),
    FunctionUpdated {
        patch: FunctionPatch,
        result: ApiResult<()>,
    },
    FunctionDeleted(ApiResult<()>),
    EnvUpdated(ApiResult<()>),
    Versions {
        page: PageState,
        result: ApiResult<VersionList>,
    },
    VersionActivated {
        version: u32,
        result: ApiResult<()>,
    },
    Diff(ApiResult<VersionDiff>),
    Executions {
        page: PageState,
        result: ApiResult<ExecutionList>,
    },
    Execution(ApiResult<Execution>),
    Logs {
        page: PageState,
        result: ApiResult<LogList>,
    },
    Invoked(ApiResult<InvokeResponse>),
}

impl ApiResponse {
    /// The error carried by this response, if it failed
    pub fn error(&self) -> Option<&lunar_api::ApiError> {
        match self {
            ApiResponse::LoggedIn(r)
            | ApiResponse::LoggedOut(r)
            | ApiResponse::FunctionCreated(r)
            | ApiResponse::FunctionDeleted(r)
            | ApiResponse::EnvUpdated(r)
            | ApiResponse::FunctionUpdated { result: r, .. }
            | ApiResponse::VersionActivated { result: r, .. } => r.as_ref().err(),
            ApiResponse::Functions { result, .. } => result.as_ref().err(),
            ApiResponse::Function(r) => r.as_ref().err(),
            ApiResponse::Versions { result, .. } => result.as_ref().err(),
            ApiResponse::Diff(r) => r.as_ref().err(),
            ApiResponse::Executions { result, .. } => result.as_ref().err(),
            ApiResponse::Execution(r) => r.as_ref().err(),
            ApiResponse::Logs { result, .. } => result.as_ref().err(),
            ApiResponse::Invoked(r) => r.as_ref().err(),
        }
    }
}
