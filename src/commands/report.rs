use std::collections::BTreeSet;
use std::io::{self, Write};
use std::path::PathBuf;
use clap::{crate_version, Arg, ArgMatches, Command};
use cli_table::{format::Justify, print_stdout, Table, WithTitle};
use crate::chef::client::ChefClient;
use crate::commands::menu::{prompt_output, prompt_scope, OutputTarget, Scope, Selection};
use crate::commands::screen::{show_header, show_stage, show_subheader};
use crate::config::dnsxref::{load_dnsxref, DnsCrossReference};
use crate::config::settings::{default_dnsxref_path, default_settings_path, load_settings, Settings};
use crate::error::InventoryError;
use crate::inventory::collector::collect;
use crate::inventory::environments::discover_environments;
use crate::inventory::source::InventorySource;
use crate::models::inventory::Inventory;
use crate::report::csv::format_csv;
use crate::report::mediawiki::format_mediawiki;
use crate::report::sink::{write_console, write_file};
use crate::report::structured::{format_json, format_yaml};

pub(crate) const ALL_ENVIRONMENTS_FILENAME: &str = "all_environments";

pub(crate) fn command_config() -> Command {
    Command::new("chef-vm-inventory")
        .version(crate_version!())
        .about("Inventory Chef managed virtual machines grouped by environment")
        .arg(
            Arg::new("settingspath")
                .short('s')
                .long("settingspath")
                .value_name("SETTINGSPATH")
                .help("JSON, YAML or TOML settings file if not in the config directory")
        )
        .arg(
            Arg::new("dnsxref")
                .short('d')
                .long("dnsxref")
                .value_name("DNSXREFPATH")
                .help("JSON file mapping FQDN to DNS alias")
        )
        .arg(
            Arg::new("scope")
                .long("scope")
                .value_name("SCOPE")
                .help("Skip the action menu: all | select")
        )
        .arg(
            Arg::new("output")
                .long("output")
                .value_name("OUTPUT")
                .help("Skip the output menu: console-mediawiki | file-mediawiki | file-csv | file-json | file-yaml")
        )
}

#[derive(Table)]
struct EnvironmentSummaryItem {
    #[table(title = "Root Environment")]
    root: String,
    #[table(title = "Nodes", justify = "Justify::Right")]
    nodes: usize,
}

pub(crate) fn execute(args: &ArgMatches) -> Result<(), InventoryError> {
    let mut screen = io::stderr();

    let settings_path = args
        .get_one::<String>("settingspath")
        .cloned()
        .unwrap_or_else(default_settings_path);
    let mut settings = load_settings(&settings_path)?;
    settings.ensure_output_dir()?;

    let dnsxref_path = args
        .get_one::<String>("dnsxref")
        .cloned()
        .or_else(|| settings.dnsxref_path.clone())
        .unwrap_or_else(default_dnsxref_path);
    let dnsxref = load_dnsxref(&dnsxref_path)?;

    let stdin = io::stdin();
    let mut input = stdin.lock();

    let scope = match args.get_one::<String>("scope") {
        Some(value) => Scope::from_flag(value)?,
        None => {
            show_header(&mut screen)?;
            show_subheader(&mut screen, "SELECT ACTION")?;
            match prompt_scope(&mut input, &mut screen)? {
                Selection::Chosen(scope) => scope,
                Selection::Quit => return Ok(()),
            }
        }
    };

    let target = match args.get_one::<String>("output") {
        Some(value) => OutputTarget::from_flag(value)?,
        None => {
            show_header(&mut screen)?;
            show_subheader(&mut screen, "SELECT OUTPUT")?;
            match prompt_output(&mut input, &mut screen)? {
                Selection::Chosen(target) => target,
                Selection::Quit => return Ok(()),
            }
        }
    };

    apply_scope(&mut settings, scope)?;
    let client = ChefClient::new(settings.chef_config()?)?;

    show_stage(&mut screen, "FETCHING DATA")?;
    let inventory = gather(&client, &settings, scope, &dnsxref, &mut screen)?;
    if inventory.is_empty() {
        warn!("no nodes found for the selected environments");
    }
    info!("collected {} nodes", inventory.node_count());

    show_stage(&mut screen, target.title())?;
    let written = deliver(&inventory, &settings, target, &mut io::stdout())?;

    if let Some(path) = written {
        show_header(&mut screen)?;
        show_subheader(&mut screen, "COMPLETED")?;
        writeln!(screen, "Report written to {}", path.display())?;
        print_summary(&inventory)?;
    }

    Ok(())
}

/// Check scope prerequisites before the server is contacted.
pub(crate) fn apply_scope(settings: &mut Settings, scope: Scope) -> Result<(), InventoryError> {
    match scope {
        Scope::AllEnvironments => {
            settings.output_filename = ALL_ENVIRONMENTS_FILENAME.to_string();
        }
        Scope::SelectEnvironments => {
            settings.environments()?;
        }
    }

    Ok(())
}

pub(crate) fn gather<W: Write>(source: &dyn InventorySource, settings: &Settings, scope: Scope, dnsxref: &DnsCrossReference, screen: &mut W) -> Result<Inventory, InventoryError> {
    let roots: BTreeSet<String> = match scope {
        Scope::AllEnvironments => {
            show_stage(screen, "FETCHING ALL ENVIRONMENTS")?;
            discover_environments(source)?
        }
        Scope::SelectEnvironments => settings.environments()?.into_iter().collect(),
    };

    collect(source, &roots, dnsxref)
}

pub(crate) fn render(inventory: &Inventory, target: OutputTarget) -> Result<String, InventoryError> {
    match target {
        OutputTarget::ConsoleMediaWiki | OutputTarget::FileMediaWiki => Ok(format_mediawiki(inventory)),
        OutputTarget::FileCsv => Ok(format_csv(inventory)),
        OutputTarget::FileJson => format_json(inventory),
        OutputTarget::FileYaml => format_yaml(inventory),
    }
}

/// Returns the written file, `None` when the report went to the console.
pub(crate) fn deliver<W: Write>(inventory: &Inventory, settings: &Settings, target: OutputTarget, console: &mut W) -> Result<Option<PathBuf>, InventoryError> {
    let content = render(inventory, target)?;

    match target.extension() {
        None => {
            write_console(console, &content)?;
            Ok(None)
        }
        Some(extension) => write_file(&settings.output_file(extension), &content).map(Some),
    }
}

fn print_summary(inventory: &Inventory) -> Result<(), InventoryError> {
    let items: Vec<EnvironmentSummaryItem> = inventory
        .environments()
        .map(|(root, nodes)| EnvironmentSummaryItem {
            root: root.clone(),
            nodes: nodes.len(),
        })
        .collect();

    print_stdout(items.with_title())?;
    Ok(())
}
