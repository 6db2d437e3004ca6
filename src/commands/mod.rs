//! Command implementations for inilock.
//!
//! The dispatcher builds the store from the parsed CLI arguments and
//! routes each subcommand to its handler. Handlers format results for the
//! terminal; all storage and locking semantics live in the `store` module.

use crate::cli::{Cli, Command, DelArgs, DumpArgs, GetArgs, KeysArgs, SectionsArgs, SetArgs};
use crate::convert;
use crate::error::{InilockError, Result};
use crate::ini::{self, IniDocument};
use crate::settings::Settings;
use crate::store::IniStore;
use serde_json::Value;

/// Dispatch a parsed command line to its implementation.
pub fn dispatch(cli: Cli) -> Result<()> {
    let settings = match &cli.config {
        Some(path) => Settings::load(path)?,
        None => Settings::default(),
    };
    let store = IniStore::new(cli.file, settings);

    match cli.command {
        Command::Get(args) => cmd_get(&store, args),
        Command::Set(args) => cmd_set(&store, args),
        Command::Del(args) => cmd_del(&store, args),
        Command::Sections(args) => cmd_sections(&store, args),
        Command::Keys(args) => cmd_keys(&store, args),
        Command::Dump(args) => cmd_dump(&store, args),
    }
}

fn cmd_get(store: &IniStore, args: GetArgs) -> Result<()> {
    match &args.key {
        Some(key) => {
            let value = store.read_value(&args.section, key)?;
            if args.typed {
                println!("{}", convert::coerce(&value).to_json());
            } else if args.json {
                println!("{}", Value::String(value));
            } else {
                println!("{}", value);
            }
        }
        None => {
            let section = store.read_section(&args.section)?;
            if args.typed {
                let typed: serde_json::Map<String, Value> = section
                    .iter()
                    .map(|(k, v)| (k.clone(), convert::coerce(v).to_json()))
                    .collect();
                println!("{}", to_pretty_json(&Value::Object(typed))?);
            } else if args.json {
                println!("{}", to_pretty_json(&section)?);
            } else {
                for (key, value) in &section {
                    println!("{}={}", key, value);
                }
            }
        }
    }
    Ok(())
}

fn cmd_set(store: &IniStore, args: SetArgs) -> Result<()> {
    store.write_value(&args.section, &args.key, &args.value)
}

fn cmd_del(store: &IniStore, args: DelArgs) -> Result<()> {
    let existed = store.delete_key(&args.section, &args.key)?;
    if existed {
        println!("removed [{}] {}", args.section, args.key);
    } else {
        println!("no such key: [{}] {}", args.section, args.key);
    }
    Ok(())
}

fn cmd_sections(store: &IniStore, args: SectionsArgs) -> Result<()> {
    let sections = store.list_sections()?;
    if args.json {
        println!("{}", to_pretty_json(&sections)?);
    } else {
        for name in &sections {
            println!("{}", name);
        }
    }
    Ok(())
}

fn cmd_keys(store: &IniStore, args: KeysArgs) -> Result<()> {
    let keys = store.list_keys(&args.section)?;
    if args.json {
        println!("{}", to_pretty_json(&keys)?);
    } else {
        for name in &keys {
            println!("{}", name);
        }
    }
    Ok(())
}

fn cmd_dump(store: &IniStore, args: DumpArgs) -> Result<()> {
    let all = store.read_all()?;
    if args.json {
        println!("{}", to_pretty_json(&all)?);
    } else {
        print!("{}", ini::serialize(&IniDocument::from_map(all)));
    }
    Ok(())
}

fn to_pretty_json<T: serde::Serialize>(value: &T) -> Result<String> {
    serde_json::to_string_pretty(value)
        .map_err(|e| InilockError::Usage(format!("failed to serialize output to JSON: {}", e)))
}
