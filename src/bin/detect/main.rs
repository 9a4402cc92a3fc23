//! `detect` phase of the external chaincode builder.
//!
//! Exits 0 when the chaincode is a Kubernetes chaincode, 1 otherwise.

use fabric_builder_k8s::ops::detect;
use fabric_builder_k8s::util::log;
use fabric_builder_k8s::{CmdContext, Config, Detect};

fn main() {
    let config = Config::from_env();
    log::init(config.debug);

    let ctx = CmdContext::from_config(&config);
    let outcome = detect::execute(std::env::args_os(), &ctx, &Detect::default());

    std::process::exit(outcome.exit_code());
}
