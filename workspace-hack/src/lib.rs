// This is a stub lib.rs.
use bytes as _;
use lock_api as _;
use log as _;
use memchr as _;
use parking_lot as _;
use regex as _;
use regex_automata as _;
use regex_syntax as _;
use smallvec as _;
use tracing as _;
use tracing_core as _;
use tracing_log as _;
use tracing_subscriber as _;
