// Create the Error, ErrorKind, ResultExt, and Result types.
// Other modules `use errors::*` or name `errors::Result` directly.
#![allow(deprecated)] // error-chain expands to `Error::description` / `cause`

use error_chain::error_chain;

error_chain! {

    foreign_links {
        Io(::std::io::Error);
        DocOptFailure(::docopt::Error);
        Json(::serde_json::Error);
    }

    errors {
        InvalidDimensions(rows: usize, columns: usize) {
            description("maze dimensions too small")
            display("a maze needs at least 3 rows and 3 columns, got {} rows and {} columns",
                    rows, columns)
        }
        GridTooLarge(rows: usize, columns: usize) {
            description("maze dimensions too large")
            display("a {} x {} maze cannot be addressed with 32 bit coordinates", columns, rows)
        }
    }
}
