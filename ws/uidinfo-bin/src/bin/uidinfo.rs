use libuserhandle::consts::ERR_GID;
use libuserhandle::gid::{
    cache_app_gid,
    shared_app_gid,
    user_gid,
};
use libuserhandle::uid::{
    app_id,
    format_uid,
    is_app,
    is_core,
    is_isolated,
    user_id,
};
use libuserhandle::{
    parse_user_arg,
    Uid,
    UserArgError,
    UserHandle,
};
use log::LevelFilter;
use simple_logger::SimpleLogger;
use std::fmt::Write;

const USAGE: &str = "Usage: uidinfo [uid|all|current|cur|-u <id>]...";

/// What to print for one command line argument.
#[derive(Debug, PartialEq)]
enum Query {
    Uid(Uid),
    User(String),
}

#[derive(Debug, PartialEq)]
enum ArgError {
    BadUid(String),
    MissingUser,
    /// The own uid doesn't fit into a [`Uid`].
    BadOwnUid(u32),
    Help,
}

// This binary breaks every uid argument into its parts. Keywords and
// arguments after `-u` are parsed as users. Without arguments, it describes
// its own uid.
fn main() {
    SimpleLogger::new()
        .without_timestamps()
        .with_level(LevelFilter::Warn)
        .env()
        .init()
        .unwrap();

    let args = std::env::args().skip(1).collect::<Vec<_>>();
    let queries = match parse_args(&args) {
        Ok(queries) if queries.is_empty() => {
            let uid = unsafe { libc::getuid() };
            log::debug!("no arguments; using own uid {}", uid);
            match own_uid_query(uid) {
                Ok(query) => vec![query],
                Err(err) => {
                    eprintln!("Error: {:?}", err);
                    std::process::exit(1);
                }
            }
        }
        Ok(queries) => queries,
        Err(ArgError::Help) => {
            println!("{}", USAGE);
            return;
        }
        Err(err) => {
            eprintln!("Error: {:?}", err);
            eprintln!("{}", USAGE);
            std::process::exit(1);
        }
    };

    let mut failed = false;
    for query in &queries {
        match query {
            Query::Uid(uid) => print!("{}", describe_uid(*uid)),
            Query::User(arg) => match describe_user(arg) {
                Ok(text) => print!("{}", text),
                Err(err) => {
                    log::error!("{}: {:?}", err, arg);
                    failed = true;
                }
            },
        }
    }
    if failed {
        std::process::exit(1);
    }
}

fn parse_args(args: &[String]) -> Result<Vec<Query>, ArgError> {
    let mut queries = Vec::new();
    let mut args = args.iter();
    while let Some(arg) = args.next() {
        match arg.as_str() {
            "-h" | "--help" => return Err(ArgError::Help),
            "-u" | "--user" => {
                let user = args.next().ok_or(ArgError::MissingUser)?;
                queries.push(Query::User(user.clone()));
            }
            _ => match arg.parse::<Uid>() {
                Ok(uid) if uid >= 0 => queries.push(Query::Uid(uid)),
                _ if parse_user_arg(arg).is_ok() => queries.push(Query::User(arg.clone())),
                _ => return Err(ArgError::BadUid(arg.clone())),
            },
        }
    }
    Ok(queries)
}

fn own_uid_query(uid: libc::uid_t) -> Result<Query, ArgError> {
    Uid::try_from(uid)
        .map(Query::Uid)
        .map_err(|_| ArgError::BadOwnUid(uid))
}

fn describe_uid(uid: Uid) -> String {
    let mut out = String::new();
    // writing into a String never fails
    let _ = writeln!(out, "uid {} ({})", uid, format_uid(uid));
    let _ = writeln!(out, "  user id    ={:>8}", user_id(uid));
    let _ = writeln!(out, "  app id     ={:>8}", app_id(uid));
    let _ = writeln!(out, "  core       ={:>8}", is_core(uid));
    let _ = writeln!(out, "  app        ={:>8}", is_app(uid));
    let _ = writeln!(out, "  isolated   ={:>8}", is_isolated(uid));
    let _ = writeln!(out, "  shared gid ={:>8}", gid_str(shared_app_gid(uid)));
    let _ = writeln!(out, "  cache gid  ={:>8}", gid_str(cache_app_gid(uid)));
    out
}

fn describe_user(arg: &str) -> Result<String, UserArgError> {
    let user_id = parse_user_arg(arg)?;
    let handle = UserHandle::of(user_id);
    let mut out = String::new();
    let _ = writeln!(out, "user {:?} = {} ({})", arg, user_id, handle);
    if user_id >= 0 {
        let _ = writeln!(out, "  user gid   ={:>8}", user_gid(user_id));
    }
    Ok(out)
}

fn gid_str(gid: i32) -> String {
    if gid == ERR_GID {
        String::from("-")
    } else {
        gid.to_string()
    }
}
