//===========================================================================//

// Returns early with an `InvalidData` error; used when reading back a
// container whose bytes don't follow the format.
macro_rules! invalid_data {
    ($($arg:tt)+) => {
        return Err(::std::io::Error::new(
            ::std::io::ErrorKind::InvalidData,
            format!($($arg)+),
        ))
    };
}

// Returns early with an `InvalidInput` error; used when the caller's images
// can't be represented in the container being written.
macro_rules! invalid_input {
    ($($arg:tt)+) => {
        return Err(::std::io::Error::new(
            ::std::io::ErrorKind::InvalidInput,
            format!($($arg)+),
        ))
    };
}

//===========================================================================//
