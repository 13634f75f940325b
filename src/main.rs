//! Prints a table of sample rational operations, including the ones that fail.
use log::info;
use ratnum::{rational, Arithmetic, Number, NumberError, Rational};
use tabled::{settings::Style, Table, Tabled};

#[derive(Tabled)]
struct Row {
    lhs: String,
    op: &'static str,
    rhs: String,
    result: String,
}

impl Row {
    fn new(
        lhs: Rational,
        op: &'static str,
        rhs: Number,
        result: Result<Rational, NumberError>,
    ) -> Self {
        Self {
            lhs: lhs.to_string(),
            op,
            rhs: rhs.to_string(),
            result: match result {
                Ok(r) => r.to_string(),
                Err(e) => format!("error: {}", e),
            },
        }
    }
}

fn main() {
    env_logger::init();

    let samples: Vec<(Rational, Number)> = vec![
        (rational!(1 / 2), rational!(1 / 3).into()),
        (rational!(2 / 3), rational!(3 / 4).into()),
        (rational!(-1 / 2), rational!(1 / 4).into()),
        (rational!(1 / 2), rational!(0 / 5).into()),
        (rational!(4 / 2), Number::Integer(2)),
    ];

    let mut rows = vec![];
    for (lhs, rhs) in samples {
        rows.push(Row::new(lhs, "+", rhs, lhs.plus(&rhs)));
        rows.push(Row::new(lhs, "-", rhs, lhs.minus(&rhs)));
        rows.push(Row::new(lhs, "*", rhs, lhs.multiplied_by(&rhs)));
        rows.push(Row::new(lhs, "/", rhs, lhs.divide_by(&rhs)));
    }
    info!("computed {} operations", rows.len());

    println!("{}", Table::new(rows).with(Style::modern()));
}
