#[macro_use]
extern crate slog;

mod logger;

use std::fs;
use std::io::{self, Read};
use std::path::{Path, PathBuf};
use std::process;

use anyhow::{anyhow, Context};
use clap::Parser;
use serde_json::Value as Json;

use product_customer_permission::{
    Customer, CustomerPermissionQueryExpander, PermissionConfig, QueryExpander, RequestParameters,
    SearchQuery, SessionCustomerClient,
};


/// Runs a search request body through the customer permission expander and
/// prints the body that would be sent to the search backend
#[derive(Debug, Parser)]
#[command(name = "expand-query", version)]
struct Args {
    /// Id of the logged-in customer. Without it the search is anonymous
    #[arg(long)]
    customer_id: Option<i64>,

    #[arg(long, requires = "customer_id")]
    customer_reference: Option<String>,

    /// JSON config file
    #[arg(long)]
    config: Option<PathBuf>,

    /// Request body file. Read from stdin when omitted
    #[arg(long)]
    input: Option<PathBuf>,

    #[arg(short, long)]
    verbose: bool,
}


fn read_input(path: Option<&Path>) -> anyhow::Result<String> {
    match path {
        Some(path) => fs::read_to_string(path).with_context(|| format!("cannot read {}", path.display())),
        None => {
            let mut data = String::new();
            io::stdin().read_to_string(&mut data).context("cannot read stdin")?;
            Ok(data)
        }
    }
}


fn run(args: Args) -> anyhow::Result<()> {
    logger::init(args.verbose).map_err(|error| anyhow!("cannot install logger: {}", error))?;
    let log = logger::root(args.verbose);

    let config = match args.config {
        Some(ref path) => PermissionConfig::from_file(path).with_context(|| format!("invalid config {}", path.display()))?,
        None => PermissionConfig::default(),
    };
    info!(log, "[cli] loaded config"; "child_type" => config.child_type.as_str());

    let body: Json = serde_json::from_str(&read_input(args.input.as_deref())?).context("request body is not valid JSON")?;
    let mut search_query = SearchQuery::from_json(&body).context("cannot parse request body")?;

    let session = SessionCustomerClient::new();
    if let Some(id_customer) = args.customer_id {
        let customer = match args.customer_reference {
            Some(ref customer_reference) => Customer::new(id_customer).with_reference(customer_reference),
            None => Customer::new(id_customer),
        };

        info!(log, "[cli] searching as customer"; "id_customer" => id_customer);
        session.set_customer(customer);
    }

    let expander = CustomerPermissionQueryExpander::new(log.new(o!("expander" => "customer-permission")), config, session);
    let expanded = expander.expand_query(&mut search_query, &RequestParameters::new())?;

    println!("{}", serde_json::to_string_pretty(&expanded.to_json())?);
    Ok(())
}


fn main() {
    if let Err(error) = run(Args::parse()) {
        eprintln!("error: {:#}", error);
        process::exit(1);
    }
}
