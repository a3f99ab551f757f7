/* ************************************************************************ **
** This file is part of cmat, and is licensed under EITHER the MIT license  **
** or the Apache 2.0 license, at your option.                               **
**                                                                          **
**     http://www.apache.org/licenses/LICENSE-2.0                           **
**     http://opensource.org/licenses/MIT                                   **
** ************************************************************************ */

use crate::FailResult;
use crate::logging::GlobalLogger;

use ::clap::{App, Arg, ArgMatches};
use ::cmat_tasks_config::{Settings, ValidatedSettings, YamlRead};
use ::std::ffi::OsStr;
use ::std::path::Path;

fn wrap_result_main<F>(main: F)
where F: FnOnce() -> FailResult<()>,
{
    main().unwrap_or_else(|e| {
        for cause in e.iter_chain() {
            error!("{}", cause);
        }

        if ::std::env::var_os("RUST_BACKTRACE") == Some(OsStr::new("1").to_owned()) {
            error!("{}", e.backtrace());
        } else {
            error!("\
                (If you found the above error message to be particularly lacking in \
                detail, try again with RUST_BACKTRACE=1)\
            ");
        }
        ::std::process::exit(1);
    });
}

fn logging_args<'a, 'b>() -> Vec<Arg<'a, 'b>> {
    vec![
        Arg::with_name("verbose")
            .short("v").long("verbose")
            .multiple(true)
            .help("log more (may be repeated)"),
        Arg::with_name("log")
            .long("log").value_name("FILE")
            .takes_value(true)
            .help("also write the log to FILE"),
    ]
}

fn init_global_logger(matches: &ArgMatches) -> FailResult<()> {
    let mut logger = GlobalLogger::default();
    logger.verbosity(matches.occurrences_of("verbose") as i32);
    if let Some(path) = matches.value_of_os("log") {
        logger.path(path);
    }
    logger.apply()
}

fn read_settings(path: Option<&OsStr>) -> FailResult<Settings> {
    let ValidatedSettings(settings) = match path {
        Some(path) => {
            let file = ::std::fs::File::open(path)
                .map_err(|e| format_err!("{}: {}", Path::new(path).display(), e))?;
            <ValidatedSettings as YamlRead>::from_reader(::std::io::BufReader::new(file))?
        },
        None => Settings::default().validate()?,
    };
    Ok(settings)
}

// -------------------------------------------------------------------------------------

// %% CRATES: binary: cmat-demo %%
pub fn demo() {
    wrap_result_main(|| {
        let matches = {
            App::new("cmat-demo")
                .version(env!("CARGO_PKG_VERSION"))
                .about("Checks known answers, then computes a batch of random matrix products.")
                .args(&logging_args())
                .args(&[
                    Arg::with_name("config")
                        .short("c").long("config").value_name("CONFIG")
                        .takes_value(true)
                        .help("settings yaml (if omitted, defaults are used)"),
                    Arg::with_name("json")
                        .long("json").value_name("OUT")
                        .takes_value(true)
                        .help("write the products and a summary table as JSON"),
                ])
                .get_matches()
        };
        init_global_logger(&matches)?;

        let settings = read_settings(matches.value_of_os("config"))?;
        crate::demo::run(&settings, matches.value_of_os("json").map(Path::new))
    });
}

// %% CRATES: binary: cmat-grow %%
pub fn grow() {
    wrap_result_main(|| {
        let matches = {
            App::new("cmat-grow")
                .version(env!("CARGO_PKG_VERSION"))
                .about("Compares the cost of growing a matrix by rows versus by columns.")
                .args(&logging_args())
                .args(&[
                    Arg::with_name("size")
                        .value_name("SIZE")
                        .default_value("300")
                        .help("side length of the square matrix to build"),
                ])
                .get_matches()
        };
        init_global_logger(&matches)?;

        let size = match matches.value_of("size") {
            Some(s) => s.parse::<usize>().map_err(|e| format_err!("invalid size {:?}: {}", s, e))?,
            None => bail!("missing size"),
        };
        crate::grow::run(size)
    });
}
