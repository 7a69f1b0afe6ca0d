// A build script is required for cargo to consider build dependencies.
use bytes as _;
use log as _;
use memchr as _;
use tracing as _;
use tracing_core as _;

fn main() {}
