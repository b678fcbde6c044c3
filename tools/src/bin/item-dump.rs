use std::io::{self, Read};

use clap::{App, Arg};
use env_logger::Env;
use itemnbt::Value;
use log::info;

type Result<T> = std::result::Result<T, Box<dyn std::error::Error>>;

fn dump(name: &str, value: &Value, indent: usize) {
    match value {
        Value::Compound(c) => {
            println!("{:indent$}{}: Compound ({} entries)", "", name, c.len(), indent = indent);
            for (k, v) in c {
                dump(k, v, indent + 4);
            }
        }
        Value::List(l) => {
            println!("{:indent$}{}: List ({} entries)", "", name, l.len(), indent = indent);
            for (i, v) in l.iter().enumerate() {
                dump(&i.to_string(), v, indent + 4);
            }
        }
        Value::String(s) => println!("{:indent$}{}: {:?}", "", name, s, indent = indent),
        v => println!("{:indent$}{}: {:?}", "", name, v, indent = indent),
    }
}

fn main() -> Result<()> {
    env_logger::Builder::from_env(Env::default().default_filter_or("warn"))
        .format_timestamp(None)
        .init();

    let matches = App::new("item-dump")
        .about("Decode base64 gzipped item data, as found in auction item_bytes")
        .arg(
            Arg::with_name("json")
                .long("json")
                .takes_value(false)
                .help("print the tree as JSON"),
        )
        .arg(
            Arg::with_name("blob")
                .takes_value(true)
                .required(false)
                .help("item data; read from stdin if missing"),
        )
        .get_matches();

    let blob = match matches.value_of("blob") {
        Some(blob) => blob.to_owned(),
        None => {
            let mut buf = String::new();
            io::stdin().read_to_string(&mut buf)?;
            buf
        }
    };
    let blob = blob.trim();
    info!("decoding {} bytes of item data", blob.len());

    let value = itemnbt::decode(blob)?;

    if matches.is_present("json") {
        println!("{}", serde_json::to_string_pretty(&value)?);
    } else {
        dump("root", &value, 0);
    }

    Ok(())
}
