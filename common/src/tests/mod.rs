mod http_status;
mod redaction;
