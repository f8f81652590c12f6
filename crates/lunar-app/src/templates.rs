//! Starter templates offered when creating a function

/// A starter Lua program for a new function
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FunctionTemplate {
    pub id: &'static str,
    pub name: &'static str,
    pub description: &'static str,
    pub code: &'static str,
}

/// All templates in picker order. The first one is the default.
pub const TEMPLATES: [FunctionTemplate; 5] = [
    FunctionTemplate {
        id: "http",
        name: "HTTP Template",
        description: "Handle HTTP requests with custom logic",
        code: HTTP_CODE,
    },
    FunctionTemplate {
        id: "scheduled",
        name: "Scheduled Task",
        description: "Run code on a schedule",
        code: SCHEDULED_CODE,
    },
    FunctionTemplate {
        id: "webhook",
        name: "Webhook Handler",
        description: "Process incoming webhooks",
        code: WEBHOOK_CODE,
    },
    FunctionTemplate {
        id: "api",
        name: "REST API",
        description: "Build RESTful API endpoints",
        code: REST_API_CODE,
    },
    FunctionTemplate {
        id: "blank",
        name: "Blank",
        description: "Start with empty template",
        code: BLANK_CODE,
    },
];

pub fn default_template() -> &'static FunctionTemplate {
    &TEMPLATES[0]
}

pub fn find(id: &str) -> Option<&'static FunctionTemplate> {
    TEMPLATES.iter().find(|t| t.id == id)
}

const HTTP_CODE: &str = r#"-- HTTP Handler
function handler(ctx, event)
    local method = event.method
    local path = event.path

    log.info("Received " .. method .. " request to " .. path)

    return {
        statusCode = 200,
        headers = { ["Content-Type"] = "application/json" },
        body = json.encode({
            message = "Hello from Lua!",
            method = method,
            path = path
        })
    }
end"#;

const SCHEDULED_CODE: &str = r#"-- Scheduled Task
function handler(ctx, event)
    -- This function runs on schedule
    local timestamp = time.format(time.now(), "2006-01-02 15:04:05")

    log.info("Task executed at " .. timestamp)

    return {
        statusCode = 200,
        headers = { ["Content-Type"] = "application/json" },
        body = json.encode({
            status = "completed",
            timestamp = timestamp
        })
    }
end"#;

const WEBHOOK_CODE: &str = r#"-- Webhook Handler
function handler(ctx, event)
    local body = event.body
    local headers = event.headers

    -- Process webhook payload
    log.info("Received webhook")

    return {
        statusCode = 200,
        headers = { ["Content-Type"] = "application/json" },
        body = json.encode({
            received = true,
            body_length = #body
        })
    }
end"#;

const REST_API_CODE: &str = r#"-- REST API Endpoint
function handler(ctx, event)
    local method = event.method

    if method == "GET" then
        return {
            statusCode = 200,
            headers = { ["Content-Type"] = "application/json" },
            body = json.encode({
                items = {},
                total = 0
            })
        }
    elseif method == "POST" then
        local data = json.decode(event.body)
        return {
            statusCode = 201,
            headers = { ["Content-Type"] = "application/json" },
            body = json.encode({
                id = crypto.uuid(),
                created = true
            })
        }
    else
        return {
            statusCode = 405,
            headers = { ["Content-Type"] = "application/json" },
            body = json.encode({
                error = "Method not allowed"
            })
        }
    end
end"#;

const BLANK_CODE: &str = r#"-- Your function code here
function handler(ctx, event)
    return {
        statusCode = 200,
        headers = { ["Content-Type"] = "text/plain" },
        body = "Hello, World!"
    }
end"#;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_http_is_default() {
        assert_eq!(default_template().id, "http");
    }

    #[test]
    fn test_every_template_defines_handler() {
        for template in &TEMPLATES {
            assert!(
                template.code.contains("function handler(ctx, event)"),
                "{} has no handler",
                template.id
            );
        }
    }

    #[test]
    fn test_find_by_id() {
        assert_eq!(find("blank").map(|t| t.name), Some("Blank"));
        assert!(find("cron").is_none());
    }
}
