#![allow(dead_code)]
use assert_cmd::{Command, cargo_bin_cmd};
use bikeshare::config::Config;
use bikeshare::core::session::Session;
use bikeshare::errors::AppResult;
use bikeshare::models::FilterPreset;
use bikeshare::ui::{Console, StreamReader};
use std::fs;
use std::io::Cursor;
use std::path::Path;
use tempfile::TempDir;

pub const CHICAGO_CSV: &str = "\
,Start Time,End Time,Trip Duration,Start Station,End Station,User Type,Gender,Birth Year
1423854,2017-01-02 08:10:00,2017-01-02 08:20:00,600,Clark St & Elm St,Canal St & Adams St,Subscriber,Male,1980.0
955915,2017-01-03 09:15:00,2017-01-03 09:35:00,1200,Clark St & Elm St,Canal St & Adams St,Subscriber,Female,1990.0
9031,2017-02-06 08:20:00,2017-02-06 08:25:00,300,Canal St & Adams St,Streeter Dr & Grand Ave,Customer,,
304487,2017-02-06 17:05:00,2017-02-06 17:20:00,900,Clark St & Elm St,Streeter Dr & Grand Ave,Subscriber,Male,1985.0
45207,2017-02-07 08:45:00,2017-02-07 09:15:00,1800,Streeter Dr & Grand Ave,Clark St & Elm St,Subscriber,Female,1975.0
1473887,2017-02-10 12:00:00,2017-02-10 12:10:00,600,Clark St & Elm St,Canal St & Adams St,Subscriber,Male,1992.0
961916,2017-02-12 08:30:00,2017-02-12 09:30:00,3600,Canal St & Adams St,Streeter Dr & Grand Ave,Customer,,
65924,2017-03-06 18:00:00,2017-03-06 18:07:30,450,Streeter Dr & Grand Ave,Canal St & Adams St,Subscriber,Male,1988.0
606841,2017-03-08 07:55:00,2017-03-08 08:07:30,750,Clark St & Elm St,Canal St & Adams St,Subscriber,Female,1995.0
135470,2017-04-02 08:05:00,2017-04-02 08:30:00,1500,Canal St & Adams St,Clark St & Elm St,Customer,Female,2000.0
1119380,2017-05-05 16:40:00,2017-05-05 17:20:00,2400,Clark St & Elm St,Streeter Dr & Grand Ave,Subscriber,Male,1970.0
1436286,2017-06-01 10:10:00,2017-06-01 10:15:30,330,Streeter Dr & Grand Ave,Clark St & Elm St,Subscriber,Male,1983.0
";

pub const NEW_YORK_CITY_CSV: &str = "\
,Start Time,End Time,Trip Duration,Start Station,End Station,User Type,Gender,Birth Year
5688089,2017-06-11 14:55:05,2017-06-11 15:08:21,795,Suffolk St & Stanton St,W Broadway & Spring St,Subscriber,Male,1998.0
4096714,2017-05-11 15:30:11,2017-05-11 15:41:43,692,Lexington Ave & E 63 St,1 Ave & E 78 St,Subscriber,Male,1981.0
2173887,2017-03-29 13:26:26,2017-03-29 13:48:31,1325,1 Pl & Clinton St,Henry St & Degraw St,,,
";

pub const WASHINGTON_CSV: &str = "\
,Start Time,End Time,Trip Duration,Start Station,End Station,User Type
1621326,2017-03-01 07:00:00,2017-03-01 07:23:02,1382.0,14th & Belmont St NW,15th & K St NW,Subscriber
482740,2017-03-01 07:30:00,2017-03-01 07:45:00,900.0,14th & Belmont St NW,15th & K St NW,Subscriber
1330037,2017-03-03 19:10:00,2017-03-03 19:50:00,2400.0,15th & K St NW,Lincoln Memorial,Customer
665458,2017-04-10 07:45:00,2017-04-10 07:55:00,600.0,Lincoln Memorial,14th & Belmont St NW,Subscriber
1481135,2017-06-18 14:00:00,2017-06-18 15:00:00,3600.0,14th & Belmont St NW,Lincoln Memorial,Customer
1148202,2017-01-31 07:05:00,2017-02-01 07:05:00,86400.0,15th & K St NW,14th & Belmont St NW,Subscriber
";

pub fn bikeshare() -> Command {
    cargo_bin_cmd!("bikeshare")
}

/// A temp directory holding the three city files.
pub fn data_dir() -> TempDir {
    let dir = tempfile::tempdir().expect("create temp dir");
    write_city_files(dir.path());
    dir
}

pub fn write_city_files(dir: &Path) {
    fs::write(dir.join("chicago.csv"), CHICAGO_CSV).expect("write chicago.csv");
    fs::write(dir.join("new_york_city.csv"), NEW_YORK_CITY_CSV).expect("write nyc csv");
    fs::write(dir.join("washington.csv"), WASHINGTON_CSV).expect("write washington.csv");
}

pub fn config_for(dir: &Path) -> Config {
    Config {
        data_dir: dir.to_string_lossy().to_string(),
        ..Config::default()
    }
}

/// Drive a whole session with scripted answers; returns the result and
/// everything written to the output.
pub fn run_session(cfg: &Config, preset: FilterPreset, script: &str) -> (AppResult<()>, String) {
    let console = Console::new(StreamReader::new(Cursor::new(script.to_string())), Vec::new());
    let mut session = Session::new(console, cfg, preset);
    let result = session.run();
    let out = session.into_console().into_output();
    (result, String::from_utf8(out).expect("utf8 output"))
}
