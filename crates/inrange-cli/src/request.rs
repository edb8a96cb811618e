use std::str::FromStr;

/// A `--set INDEX=VALUE` request as typed on the command line.
///
/// The index is kept raw here; it is validated against the register file
/// capacity when the request is applied.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) struct Assignment {
    pub(crate) index: usize,
    pub(crate) value: i64,
}

#[derive(Debug, Clone, PartialEq, Eq, derive_more::Display, derive_more::Error)]
pub(crate) enum AssignmentParseError {
    #[display("expected INDEX=VALUE, got {input:?}")]
    MissingSeparator { input: String },
    #[display("invalid register index {index:?}")]
    InvalidIndex { index: String },
    #[display("invalid register value {value:?}")]
    InvalidValue { value: String },
}

impl FromStr for Assignment {
    type Err = AssignmentParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let (index, value) =
            s.split_once('=')
                .ok_or_else(|| AssignmentParseError::MissingSeparator {
                    input: s.to_owned(),
                })?;
        let (index, value) = (index.trim(), value.trim());
        Ok(Self {
            index: index
                .parse()
                .map_err(|_| AssignmentParseError::InvalidIndex {
                    index: index.to_owned(),
                })?,
            value: value
                .parse()
                .map_err(|_| AssignmentParseError::InvalidValue {
                    value: value.to_owned(),
                })?,
        })
    }
}
