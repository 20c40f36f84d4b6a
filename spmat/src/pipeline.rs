//! Load, combine and save in one call

use std::path::PathBuf;

use spmat_core::{DataType, MatrixElement, Operation, Shape};
use tracing::{debug, info, info_span};

use crate::config::EngineConfig;
use crate::error::Result;
use crate::file_io::MatrixFile;

/// One binary operation over two matrix files
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct OperationRequest {
    pub operation: Operation,
    pub left: PathBuf,
    pub right: PathBuf,
    pub output: PathBuf,
}

impl OperationRequest {
    pub fn new(
        operation: Operation,
        left: impl Into<PathBuf>,
        right: impl Into<PathBuf>,
        output: impl Into<PathBuf>,
    ) -> Self {
        Self {
            operation,
            left: left.into(),
            right: right.into(),
            output: output.into(),
        }
    }
}

/// What a successful run produced
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct OperationSummary {
    pub operation: Operation,
    pub data_type: DataType,
    pub output: PathBuf,
    pub shape: Shape,
    pub nnz: usize,
}

/// Run `request` with element type `T`
///
/// Both inputs are parsed before anything is computed, and the output file is
/// only created once the result is complete.
pub fn run<T: MatrixElement>(
    request: &OperationRequest,
    config: &EngineConfig,
) -> Result<OperationSummary> {
    let _span = info_span!(
        "run",
        operation = %request.operation,
        dtype = %T::data_type()
    )
    .entered();

    let left = MatrixFile::load::<T, _>(&request.left, config)?;
    let right = MatrixFile::load::<T, _>(&request.right, config)?;

    debug!(
        left = %left.shape(),
        right = %right.shape(),
        strategy = %config.strategy,
        "applying operation"
    );
    let result = request
        .operation
        .apply_with(&left, &right, config.strategy)?;

    MatrixFile::save(&request.output, &result)?;
    info!(
        output = %request.output.display(),
        shape = %result.shape(),
        nnz = result.nnz(),
        "operation complete"
    );

    Ok(OperationSummary {
        operation: request.operation,
        data_type: T::data_type(),
        output: request.output.clone(),
        shape: result.shape(),
        nnz: result.nnz(),
    })
}

/// Run `request` with the element type chosen at runtime
pub fn run_as(
    data_type: DataType,
    request: &OperationRequest,
    config: &EngineConfig,
) -> Result<OperationSummary> {
    match data_type {
        DataType::F32 => run::<f32>(request, config),
        DataType::F64 => run::<f64>(request, config),
        DataType::I32 => run::<i32>(request, config),
        DataType::I64 => run::<i64>(request, config),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::Error;
    use spmat_core::{ErrorCategory, MultiplyStrategy};
    use std::fs;
    use tempfile::TempDir;

    fn setup() -> (TempDir, PathBuf, PathBuf) {
        let dir = TempDir::new().unwrap();
        let a = dir.path().join("a.txt");
        let b = dir.path().join("b.txt");
        fs::write(&a, "rows=2\ncols=2\n(0,0,1)\n(1,1,2)").unwrap();
        fs::write(&b, "rows=2\ncols=2\n(0,1,3)\n(1,0,4)").unwrap();
        (dir, a, b)
    }

    #[test]
    fn test_run_multiply() {
        let (dir, a, b) = setup();
        let out = dir.path().join("c.txt");
        let request = OperationRequest::new(Operation::Multiply, &a, &b, &out);

        for strategy in [MultiplyStrategy::RowIndexed, MultiplyStrategy::ColumnScan] {
            let config = EngineConfig::default().with_strategy(strategy);
            let summary = run::<f64>(&request, &config).unwrap();
            assert_eq!(summary.shape, Shape::new(2, 2));
            assert_eq!(summary.nnz, 2);
            assert_eq!(
                fs::read_to_string(&out).unwrap(),
                "rows=2\ncols=2\n(0, 1, 3)\n(1, 0, 8)"
            );
        }
    }

    #[test]
    fn test_run_as_integer() {
        let (dir, a, b) = setup();
        let out = dir.path().join("sum.txt");
        let request = OperationRequest::new(Operation::Add, &a, &b, &out);

        let summary = run_as(DataType::I32, &request, &EngineConfig::default()).unwrap();
        assert_eq!(summary.data_type, DataType::I32);
        assert_eq!(summary.nnz, 4);
        assert_eq!(
            fs::read_to_string(&out).unwrap(),
            "rows=2\ncols=2\n(0, 0, 1)\n(0, 1, 3)\n(1, 0, 4)\n(1, 1, 2)"
        );
    }

    #[test]
    fn test_failure_writes_nothing() {
        let (dir, a, _) = setup();
        let wide = dir.path().join("wide.txt");
        fs::write(&wide, "rows=2\ncols=3\n(0,2,1)\n(1,0,1)").unwrap();
        let out = dir.path().join("out.txt");

        let request = OperationRequest::new(Operation::Subtract, &a, &wide, &out);
        let err = run::<f64>(&request, &EngineConfig::default()).unwrap_err();
        assert_eq!(err.category(), Some(ErrorCategory::Dimension));
        assert!(!out.exists());

        let bad = dir.path().join("bad.txt");
        fs::write(&bad, "rows=1\ncols=1\n[1, 2, 3]").unwrap();
        let request = OperationRequest::new(Operation::Add, &bad, &a, &out);
        let err = run::<f64>(&request, &EngineConfig::default()).unwrap_err();
        assert!(matches!(err, Error::Matrix(_)));
        assert!(err.to_string().contains("line 3"));
        assert!(!out.exists());
    }

    #[test]
    fn test_integer_overflow_writes_nothing() {
        let dir = TempDir::new().unwrap();
        let max32 = dir.path().join("max32.txt");
        let max64 = dir.path().join("max64.txt");
        fs::write(&max32, "rows=1\ncols=1\n(0, 0, 2147483647)").unwrap();
        fs::write(&max64, "rows=1\ncols=1\n(0, 0, 9223372036854775807)").unwrap();
        let out = dir.path().join("out.txt");
        let config = EngineConfig::default();

        let request = OperationRequest::new(Operation::Add, &max32, &max32, &out);
        let err = run_as(DataType::I32, &request, &config).unwrap_err();
        assert_eq!(err.category(), Some(ErrorCategory::Overflow));
        assert!(!out.exists());
        // the same values fit once widened
        assert_eq!(run_as(DataType::I64, &request, &config).unwrap().nnz, 1);
        fs::remove_file(&out).unwrap();

        let request = OperationRequest::new(Operation::Multiply, &max64, &max64, &out);
        let err = run_as(DataType::I64, &request, &config).unwrap_err();
        assert!(err.to_string().contains("Cannot multiply at (0, 0)"));
        assert!(!out.exists());
    }

    #[cfg(feature = "serde")]
    #[test]
    fn test_summary_json() {
        let summary = OperationSummary {
            operation: Operation::Multiply,
            data_type: DataType::F64,
            output: PathBuf::from("c.txt"),
            shape: Shape::new(2, 3),
            nnz: 4,
        };
        let json = serde_json::to_value(&summary).unwrap();
        assert_eq!(json["operation"], "multiply");
        assert_eq!(json["data_type"], "f64");
        assert_eq!(json["shape"]["rows"], 2);
        assert_eq!(json["nnz"], 4);
    }
}
