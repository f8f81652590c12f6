//! Backend abstraction over every REST operation the console performs.
//!
//! The action layer is generic over [`Backend`], which lets handler tests
//! swap the HTTP client for a recording fake.

use lunar_core::{
    EnvVars, Execution, ExecutionList, Function, FunctionList, LogList, VersionDiff, VersionList,
};

use crate::error::ApiResult;
use crate::requests::{FunctionPatch, InvokeRequest, InvokeResponse, NewFunction};

#[trait_variant::make(Backend: Send)]
pub trait LocalBackend {
    /// Exchange an API key for a session cookie
    async fn login(&self, api_key: &str) -> ApiResult<()>;

    async fn logout(&self) -> ApiResult<()>;

    async fn list_functions(&self, limit: u64, offset: u64) -> ApiResult<FunctionList>;

    async fn get_function(&self, id: &str) -> ApiResult<Function>;

    async fn create_function(&self, function: &NewFunction) -> ApiResult<()>;

    /// Send only the fields set in `patch`
    async fn update_function(&self, id: &str, patch: &FunctionPatch) -> ApiResult<()>;

    async fn delete_function(&self, id: &str) -> ApiResult<()>;

    /// Replace the whole env var mapping
    async fn update_env(&self, id: &str, env_vars: &EnvVars) -> ApiResult<()>;

    async fn list_versions(&self, id: &str, limit: u64, offset: u64) -> ApiResult<VersionList>;

    async fn activate_version(&self, id: &str, version: u32) -> ApiResult<()>;

    async fn diff_versions(&self, id: &str, old: u32, new: u32) -> ApiResult<VersionDiff>;

    async fn list_executions(&self, id: &str, limit: u64, offset: u64)
        -> ApiResult<ExecutionList>;

    async fn get_execution(&self, id: &str) -> ApiResult<Execution>;

    async fn execution_logs(&self, id: &str, limit: u64, offset: u64) -> ApiResult<LogList>;

    /// Call the function's public endpoint. Non-2xx answers are not errors.
    async fn invoke(&self, id: &str, request: &InvokeRequest) -> ApiResult<InvokeResponse>;
}
