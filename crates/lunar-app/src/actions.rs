//! Action handlers: UpdateAction dispatch and background task spawning

use lunar_api::Backend;
use tokio::sync::mpsc;
use tracing::{debug, warn};

use crate::message::Message;
use crate::pagination::PageState;
use crate::request::{ApiCall, ApiRequest, ApiResponse};
use crate::UpdateAction;

/// Execute an action by spawning background tasks.
///
/// Each call runs on its own task and reports back as [`Message::Api`] with
/// the ticket it was issued under. Nothing is awaited here.
pub fn handle_action<B>(action: UpdateAction, backend: &B, msg_tx: mpsc::Sender<Message>)
where
    B: Backend + Clone + Sync + 'static,
{
    match action {
        UpdateAction::Api(calls) => {
            for call in calls {
                spawn_call(call, backend.clone(), msg_tx.clone());
            }
        }
    }
}

fn spawn_call<B>(call: ApiCall, backend: B, msg_tx: mpsc::Sender<Message>)
where
    B: Backend + Sync + 'static,
{
    tokio::spawn(async move {
        let ApiCall { ticket, request } = call;
        let response = execute(&backend, request).await;
        if msg_tx.send(Message::Api { ticket, response }).await.is_err() {
            debug!("Message channel closed, dropping API response");
        }
    });
}

/// Run one request against the backend
pub async fn execute<B: Backend>(backend: &B, request: ApiRequest) -> ApiResponse {
    let name = request.name();
    debug!("API request: {}", name);
    let response = match request {
        ApiRequest::Login { api_key } => ApiResponse::LoggedIn(backend.login(&api_key).await),
        ApiRequest::Logout => ApiResponse::LoggedOut(backend.logout().await),
        ApiRequest::ListFunctions { limit, offset } => ApiResponse::Functions {
            page: PageState { limit, offset },
            result: backend.list_functions(limit, offset).await,
        },
        ApiRequest::GetFunction { id } => ApiResponse::Function(backend.get_function(&id).await),
        ApiRequest::CreateFunction(function) => {
            ApiResponse::FunctionCreated(backend.create_function(&function).await)
        }
        ApiRequest::UpdateFunction { id, patch } => {
            let result = backend.update_function(&id, &patch).await;
            ApiResponse::FunctionUpdated { patch, result }
        }
        ApiRequest::DeleteFunction { id } => {
            ApiResponse::FunctionDeleted(backend.delete_function(&id).await)
        }
        ApiRequest::UpdateEnv { id, env_vars } => {
            ApiResponse::EnvUpdated(backend.update_env(&id, &env_vars).await)
        }
        ApiRequest::ListVersions { id, limit, offset } => ApiResponse::Versions {
            page: PageState { limit, offset },
            result: backend.list_versions(&id, limit, offset).await,
        },
        ApiRequest::ActivateVersion { id, version } => {
            let result = backend.activate_version(&id, version).await;
            ApiResponse::VersionActivated { version, result }
        }
        ApiRequest::DiffVersions { id, old, new } => {
            ApiResponse::Diff(backend.diff_versions(&id, old, new).await)
        }
        ApiRequest::ListExecutions { id, limit, offset } => ApiResponse::Executions {
            page: PageState { limit, offset },
            result: backend.list_executions(&id, limit, offset).await,
        },
        ApiRequest::GetExecution { id } => {
            ApiResponse::Execution(backend.get_execution(&id).await)
        }
        ApiRequest::ExecutionLogs { id, limit, offset } => ApiResponse::Logs {
            page: PageState { limit, offset },
            result: backend.execution_logs(&id, limit, offset).await,
        },
        ApiRequest::Invoke { id, request } => {
            ApiResponse::Invoked(backend.invoke(&id, &request).await)
        }
    };
    if let Some(err) = response.error() {
        warn!("API request {} failed: {}", name, err);
    }
    response
}

#[cfg(test)]
mod tests {
    use std::sync::{Arc, Mutex};

    use lunar_api::{ApiError, ApiResult, FunctionPatch, InvokeRequest, InvokeResponse, NewFunction};
    use lunar_core::{
        EnvVars, Execution, ExecutionList, Function, FunctionList, LogList, VersionDiff,
        VersionList,
    };

    use super::*;
    use crate::request::Ticket;

    /// Backend that records every call and answers with canned data
    #[derive(Clone, Default)]
    struct RecordingBackend {
        calls: Arc<Mutex<Vec<String>>>,
    }

    impl RecordingBackend {
        fn record(&self, call: String) {
            self.calls.lock().unwrap().push(call);
        }

        fn calls(&self) -> Vec<String> {
            self.calls.lock().unwrap().clone()
        }
    }

    fn not_found() -> ApiError {
        ApiError::Status {
            status: 404,
            message: "Function not found".into(),
        }
    }

    impl Backend for RecordingBackend {
        async fn login(&self, api_key: &str) -> ApiResult<()> {
            self.record(format!("login {api_key}"));
            Ok(())
        }

        async fn logout(&self) -> ApiResult<()> {
            self.record("logout".into());
            Ok(())
        }

        async fn list_functions(&self, limit: u64, offset: u64) -> ApiResult<FunctionList> {
            self.record(format!("list_functions {limit} {offset}"));
            Ok(FunctionList::default())
        }

        async fn get_function(&self, id: &str) -> ApiResult<Function> {
            self.record(format!("get_function {id}"));
            Err(not_found())
        }

        async fn create_function(&self, function: &NewFunction) -> ApiResult<()> {
            self.record(format!("create_function {}", function.name));
            Ok(())
        }

        async fn update_function(&self, id: &str, patch: &FunctionPatch) -> ApiResult<()> {
            self.record(format!("update_function {id} {:?}", patch.disabled));
            Ok(())
        }

        async fn delete_function(&self, id: &str) -> ApiResult<()> {
            self.record(format!("delete_function {id}"));
            Ok(())
        }

        async fn update_env(&self, id: &str, env_vars: &EnvVars) -> ApiResult<()> {
            self.record(format!("update_env {id} {}", env_vars.len()));
            Ok(())
        }

        async fn list_versions(&self, id: &str, _: u64, _: u64) -> ApiResult<VersionList> {
            self.record(format!("list_versions {id}"));
            Ok(VersionList::default())
        }

        async fn activate_version(&self, id: &str, version: u32) -> ApiResult<()> {
            self.record(format!("activate_version {id} {version}"));
            Ok(())
        }

        async fn diff_versions(&self, id: &str, old: u32, new: u32) -> ApiResult<VersionDiff> {
            self.record(format!("diff_versions {id} {old} {new}"));
            Ok(VersionDiff {
                old_version: old,
                new_version: new,
                diff: Vec::new(),
            })
        }

        async fn list_executions(&self, id: &str, _: u64, _: u64) -> ApiResult<ExecutionList> {
            self.record(format!("list_executions {id}"));
            Ok(ExecutionList::default())
        }

        async fn get_execution(&self, id: &str) -> ApiResult<Execution> {
            self.record(format!("get_execution {id}"));
            Err(not_found())
        }

        async fn execution_logs(&self, id: &str, _: u64, _: u64) -> ApiResult<LogList> {
            self.record(format!("execution_logs {id}"));
            Ok(LogList::default())
        }

        async fn invoke(&self, id: &str, request: &InvokeRequest) -> ApiResult<InvokeResponse> {
            self.record(format!("invoke {id} {}", request.method));
            Ok(InvokeResponse {
                status: 200,
                ..Default::default()
            })
        }
    }

    #[tokio::test]
    async fn test_execute_keeps_mutation_context() {
        let backend = RecordingBackend::default();
        let response = execute(
            &backend,
            ApiRequest::UpdateFunction {
                id: "f1".into(),
                patch: FunctionPatch::disabled(true),
            },
        )
        .await;
        match response {
            ApiResponse::FunctionUpdated { patch, result } => {
                assert_eq!(patch.disabled, Some(true));
                assert!(result.is_ok());
            }
            other => panic!("unexpected response: {other:?}"),
        }
        assert_eq!(backend.calls(), vec!["update_function f1 Some(true)"]);

        let response = execute(
            &backend,
            ApiRequest::ActivateVersion {
                id: "f1".into(),
                version: 4,
            },
        )
        .await;
        assert!(matches!(
            response,
            ApiResponse::VersionActivated { version: 4, result: Ok(()) }
        ));
    }

    #[tokio::test]
    async fn test_list_responses_echo_requested_page() {
        let backend = RecordingBackend::default();
        let response = execute(
            &backend,
            ApiRequest::ExecutionLogs {
                id: "e1".into(),
                limit: 50,
                offset: 100,
            },
        )
        .await;
        match response {
            ApiResponse::Logs { page, result } => {
                assert_eq!(page, PageState { limit: 50, offset: 100 });
                assert!(result.is_ok());
            }
            other => panic!("unexpected response: {other:?}"),
        }
    }

    #[test]
    fn test_execute_passes_errors_through() {
        let backend = RecordingBackend::default();
        let response = tokio_test::block_on(execute(
            &backend,
            ApiRequest::GetFunction { id: "nope".into() },
        ));
        assert_eq!(response.error(), Some(&not_found()));
        assert_eq!(backend.calls(), vec!["get_function nope"]);
    }

    #[tokio::test]
    async fn test_handle_action_reports_each_call_with_its_ticket() {
        let backend = RecordingBackend::default();
        let (tx, mut rx) = mpsc::channel(8);
        let calls = vec![
            ApiCall {
                ticket: Ticket::view(3),
                request: ApiRequest::Logout,
            },
            ApiCall {
                ticket: Ticket::palette(1),
                request: ApiRequest::ListFunctions {
                    limit: 100,
                    offset: 0,
                },
            },
        ];
        handle_action(UpdateAction::Api(calls), &backend, tx);

        let mut tickets = Vec::new();
        for _ in 0..2 {
            match rx.recv().await {
                Some(Message::Api { ticket, .. }) => tickets.push(ticket),
                other => panic!("unexpected message: {other:?}"),
            }
        }
        tickets.sort_by_key(|t| t.generation);
        assert_eq!(tickets, vec![Ticket::palette(1), Ticket::view(3)]);
        assert_eq!(backend.calls().len(), 2);
    }
}
