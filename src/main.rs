use anyhow::Context;
use clap::Parser;
use crossbeam_channel as channel;

use xtouch_one::{midi, xtouch, XTouchOne};

mod demos;
use demos::Demo;

#[derive(Parser, Debug)]
#[command(
    name = "xtouch-one",
    version,
    about = "Demos for the Behringer X-Touch One in standard MIDI mode. Press Enter on the device to quit."
)]
struct Args {
    #[arg(long, default_value = xtouch::DEFAULT_CLIENT_NAME, help = "MIDI client name")]
    client_name: String,

    #[arg(
        long = "in",
        default_value = xtouch::DEFAULT_IN_PORT,
        help = "Input port name pattern (case insensitive)"
    )]
    in_port: String,

    #[arg(
        long = "out",
        default_value = xtouch::DEFAULT_OUT_PORT,
        help = "Output port name pattern (case insensitive)"
    )]
    out_port: String,

    #[arg(short, long, help = "Log device messages")]
    verbose: bool,

    #[command(subcommand)]
    demo: Demo,
}

fn main() {
    let args = Args::parse();

    env_logger::Builder::new()
        .filter_level(if args.verbose {
            log::LevelFilter::Debug
        } else {
            log::LevelFilter::Info
        })
        .parse_default_env()
        .init();

    match run(args) {
        Ok(()) => log::info!("Exiting"),
        Err(err) => {
            log::error!("Error: {err}");
            for cause in err.chain().skip(1) {
                log::error!("\t{cause}");
            }

            std::process::exit(1);
        }
    }
}

fn run(args: Args) -> anyhow::Result<()> {
    if let Demo::List = args.demo {
        let names = midi::port::list(&args.client_name)?;
        print_ports("Input", &names.ins, &args.in_port);
        print_ports("Output", &names.outs, &args.out_port);

        return Ok(());
    }

    let (msg_tx, msg_rx) = channel::unbounded();
    let conn = midi::Connection::connect(&args.client_name, &args.in_port, &args.out_port, msg_tx)
        .context("Couldn't connect to the X-Touch One")?;

    let mut device = XTouchOne::new(conn);
    demos::run(args.demo, &mut device, msg_rx)?;

    device.output_mut().disconnect();

    Ok(())
}

fn print_ports(label: &str, names: &[std::sync::Arc<str>], pattern: &str) {
    let selected = midi::port::find(names, pattern);

    println!("{label} ports:");
    for (idx, name) in names.iter().enumerate() {
        let is_selected = selected.as_ref() == Some(name);
        println!("{idx}: {name}{}", if is_selected { " (match)" } else { "" });
    }
}
