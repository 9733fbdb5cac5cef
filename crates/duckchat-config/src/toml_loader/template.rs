//! Default TOML config template with inline documentation comments.

/// Generate the default TOML config content with comments.
pub(crate) fn default_config_toml() -> String {
    r##"# duckchat configuration
# Schema version 1
# Only override what you want to change -- missing fields use defaults.

[api]
# status_url = "https://duckduckgo.com/duckchat/v1/status"
# chat_url = "https://duckduckgo.com/duckchat/v1/chat"
# user_agent = "Mozilla/5.0 (Windows NT 10.0; Win64; x64) AppleWebKit/537.36 (KHTML, like Gecko) Chrome/131.0.0.0 Safari/537.36"
# connect_timeout_secs = 10    # 1-120
# request_timeout_secs = 120   # 1-600

[chat]
default_model = "gpt-4o-mini"
# Known models: gpt-4o-mini, claude-3-haiku-20240307,
#   meta-llama/Meta-Llama-3.1-70B-Instruct-Turbo, mistralai/Mixtral-8x7B-Instruct-v0.1
# progress_interval_ms = 100   # 0-5000

[logging]
# level = "info"               # trace, debug, info, warn, error
"##
    .to_string()
}
