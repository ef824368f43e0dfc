use std::process;

#[macro_use]
extern crate log;
extern crate env_logger;
extern crate ureq;

mod commands {
    pub(crate) mod menu;
    pub(crate) mod report;
    pub(crate) mod screen;
}

mod config {
    pub(crate) mod chef;
    pub(crate) mod dnsxref;
    pub(crate) mod settings;
}

mod chef {
    pub(crate) mod auth;
    pub(crate) mod client;
    pub(crate) mod dto;
}

mod inventory {
    pub(crate) mod collector;
    pub(crate) mod environments;
    pub(crate) mod normalizer;
    pub(crate) mod source;
}

mod models {
    pub(crate) mod fact;
    pub(crate) mod inventory;
    pub(crate) mod node;
}

mod report {
    pub(crate) mod csv;
    pub(crate) mod mediawiki;
    pub(crate) mod sink;
    pub(crate) mod structured;
}

mod utils {
    pub(crate) mod run_list;
    pub(crate) mod units;
}

mod error;

fn main() {
    env_logger::init();

    let matches = commands::report::command_config().get_matches();

    if let Err(err) = commands::report::execute(&matches) {
        error!("{:?}", err);
        println!("ERROR: {}", err);
        process::exit(1);
    }
}
