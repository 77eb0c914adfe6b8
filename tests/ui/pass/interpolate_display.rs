use std::{fmt, net::Ipv4Addr, path::PathBuf};

use interlog::{interpolate, LoggerExt};

struct Version(u8, u8);

impl fmt::Display for Version {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "v{}.{}", self.0, self.1)
    }
}

fn main() {
    let logger = interlog::from_fn(|record| {
        assert_eq!(
            "connecting to {0} from {1} with {2}",
            record.state().original_format()
        );
        assert_eq!(
            "connecting to 10.0.0.1 from /srv/app with v1.2",
            record.msg().to_string()
        );
    });

    let addr = Ipv4Addr::new(10, 0, 0, 1);
    let root = PathBuf::from("/srv/app");
    let root = root.display();
    let version = Version(1, 2);

    logger.log_info(interpolate!(
        "connecting to {addr:%} from {root:%} with {version:%}"
    ));
}
