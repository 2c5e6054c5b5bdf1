use lazy_static::lazy_static;

pub mod prelude;

pub mod apsp;
pub mod distance;
pub mod hubs;
pub mod matrix;

lazy_static! {
    static ref LOG: u64 = init_log();
}

#[allow(unused)]
// install a logger facility
fn init_log() -> u64 {
    let _res = env_logger::try_init();
    println!("\n ************** initializing logger *****************\n");
    1
}

#[cfg(test)]
mod tests {
    #[test]
    // initialize once log system for tests.
    fn init_log() {
        let _res = env_logger::try_init();
    }
} // end of tests
