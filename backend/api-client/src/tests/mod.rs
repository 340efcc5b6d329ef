mod base_url;
mod errors;
mod helpers;
mod logger;
mod pipeline;
