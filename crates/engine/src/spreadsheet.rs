//! The spreadsheet engine.
//!
//! Owns the cell store and the dependency graph, and keeps every computed
//! value consistent across edits without recomputing the whole grid: an edit
//! rewires the edited cell's dependee edges, walks the dependent closure to
//! get a safe recomputation order (rejecting and rolling back edits that
//! would create a cycle), commits the new content, and re-evaluates exactly
//! the affected formula cells.

use regex::Regex;
use rustc_hash::FxHashMap;

use crate::cell::{Cell, CellContent, CellValue};
use crate::cell_name;
use crate::dep_graph::DependencyGraph;
use crate::error::SpreadsheetError;
use crate::formula::Formula;

/// Marker for a cycle found during the affected-order walk.
struct CycleDetected;

/// A grid of named cells with incremental recomputation.
///
/// Names are case-insensitive and validated against both the intrinsic shape
/// and an injected validator regex; everything stored or returned is in
/// canonical (upper-case) form. One instance is one document; there is no
/// process-wide active sheet.
#[derive(Debug)]
pub struct Spreadsheet {
    /// Non-empty cells only; absence means empty content.
    cells: FxHashMap<String, Cell>,
    deps: DependencyGraph,
    validator: Regex,
    modified: bool,
}

impl Spreadsheet {
    /// An empty sheet whose validator is the intrinsic name shape.
    pub fn new() -> Self {
        Self::with_validator(cell_name::default_validator())
    }

    /// An empty sheet with a caller-supplied name validator. The validator
    /// narrows the intrinsic shape; it cannot widen it.
    pub fn with_validator(validator: Regex) -> Self {
        Self {
            cells: FxHashMap::default(),
            deps: DependencyGraph::new(),
            validator,
            modified: false,
        }
    }

    /// The validator in effect; its pattern text is what documents record.
    pub fn validator(&self) -> &Regex {
        &self.validator
    }

    /// Whether `name` is acceptable to this sheet.
    pub fn is_valid_name(&self, name: &str) -> bool {
        cell_name::conforms(name, &self.validator)
    }

    /// True once any mutation has committed since creation or the last save.
    pub fn is_modified(&self) -> bool {
        self.modified
    }

    /// Reset the modified flag. Called by the persistence layer after a
    /// successful save, and at the end of a load.
    pub fn mark_saved(&mut self) {
        self.modified = false;
    }

    /// Names of all non-empty cells, in no particular order.
    pub fn cell_names(&self) -> impl Iterator<Item = &str> {
        self.cells.keys().map(String::as_str)
    }

    /// All non-empty cells as (name, cell) pairs, in no particular order.
    /// Used by the persistence layer; names are already canonical.
    pub fn cells(&self) -> impl Iterator<Item = (&str, &Cell)> {
        self.cells.iter().map(|(name, cell)| (name.as_str(), cell))
    }

    /// The stored content of a cell; `Empty` for absent cells.
    pub fn get_cell_contents(&self, name: &str) -> Result<CellContent, SpreadsheetError> {
        let name = self.canonical(name)?;
        Ok(self
            .cells
            .get(&name)
            .map(|cell| cell.content.clone())
            .unwrap_or(CellContent::Empty))
    }

    /// The computed value of a cell; empty text for absent cells.
    pub fn get_cell_value(&self, name: &str) -> Result<CellValue, SpreadsheetError> {
        let name = self.canonical(name)?;
        Ok(self
            .cells
            .get(&name)
            .map(|cell| cell.value.clone())
            .unwrap_or_else(|| CellValue::Text(String::new())))
    }

    /// Set a cell's contents from its textual form and recompute everything
    /// affected.
    ///
    /// Dispatch: text that parses as a number is numeric content; a leading
    /// `=` is a formula (parsed with upper-casing normalization and this
    /// sheet's name validator); anything else is text, with the empty string
    /// clearing the cell.
    ///
    /// Returns the affected cells in recomputation order, starting with the
    /// edited cell. On any error the sheet is untouched, including the
    /// dependency rewiring a rejected cyclic formula had provisionally
    /// applied.
    pub fn set_contents_of_cell(
        &mut self,
        name: &str,
        content: &str,
    ) -> Result<Vec<String>, SpreadsheetError> {
        let name = self.canonical(name)?;

        if let Ok(number) = content.trim().parse::<f64>() {
            Ok(self.set_literal(name, CellContent::Number(number), CellValue::Number(number)))
        } else if let Some(expr) = content.strip_prefix('=') {
            let formula =
                Formula::parse_with(expr, |v| v.to_uppercase(), |v| self.is_valid_name(v))?;
            self.set_formula(name, formula)
        } else if content.is_empty() {
            Ok(self.set_literal(name, CellContent::Empty, CellValue::Text(String::new())))
        } else {
            Ok(self.set_literal(
                name,
                CellContent::Text(content.to_string()),
                CellValue::Text(content.to_string()),
            ))
        }
    }

    // =========================================================================
    // Edit paths
    // =========================================================================

    /// Number, text, and clear edits. These cannot introduce a cycle: the
    /// edited cell stops depending on anything.
    fn set_literal(&mut self, name: String, content: CellContent, value: CellValue) -> Vec<String> {
        self.deps.replace_dependees(&name, std::iter::empty::<&str>());

        let order = match self.affected_order(&name) {
            Ok(order) => order,
            // Removing edges cannot create a cycle in an acyclic graph.
            Err(CycleDetected) => unreachable!("cycle after clearing dependees"),
        };

        if matches!(content, CellContent::Empty) {
            self.cells.remove(&name);
        } else {
            self.cells.insert(name.clone(), Cell { content, value });
        }

        // The edited cell's value is already known; recompute the rest.
        for cell in order.iter().skip(1) {
            self.recalculate(cell);
        }

        self.modified = true;
        log::debug!("set {name}: {} cell(s) affected", order.len());
        order
    }

    /// Formula edits: rewire dependees provisionally, keep the rewiring only
    /// if the dependent walk stays acyclic.
    fn set_formula(
        &mut self,
        name: String,
        formula: Formula,
    ) -> Result<Vec<String>, SpreadsheetError> {
        let new_dependees: Vec<String> =
            formula.variables().into_iter().map(str::to_string).collect();
        let old_dependees: Vec<String> = self.deps.dependees(&name).map(str::to_string).collect();

        self.deps.replace_dependees(&name, &new_dependees);

        let order = match self.affected_order(&name) {
            Ok(order) => order,
            Err(CycleDetected) => {
                // Put the previous dependee set back; the caller must not be
                // able to observe the attempt.
                self.deps.replace_dependees(&name, &old_dependees);
                return Err(SpreadsheetError::Circular(name));
            }
        };

        self.cells.insert(
            name.clone(),
            Cell {
                content: CellContent::Formula(formula),
                // Overwritten immediately: the edited cell is first in order.
                value: CellValue::Text(String::new()),
            },
        );

        for cell in &order {
            self.recalculate(cell);
        }

        self.modified = true;
        log::debug!("set {name}: {} cell(s) affected", order.len());
        Ok(order)
    }

    // =========================================================================
    // Affected-order traversal
    // =========================================================================

    /// Depth-first walk of the dependent closure of `start` with
    /// three-coloring (unvisited / in-progress / finished). Reaching an
    /// in-progress cell again means this edit introduced a cycle: the
    /// committed graph is always acyclic, and every provisional edge ends at
    /// `start`.
    ///
    /// Returns the reverse finishing order: `start` first, and no cell
    /// before any of its affected dependees. Neighbors are walked in sorted
    /// order, so the result is deterministic. Iterative with an explicit
    /// frame stack to stay safe on deep dependency chains.
    fn affected_order(&self, start: &str) -> Result<Vec<String>, CycleDetected> {
        #[derive(PartialEq)]
        enum Color {
            InProgress,
            Done,
        }

        struct DfsFrame {
            name: String,
            neighbors: Vec<String>,
            next: usize,
        }

        let mut colors: FxHashMap<String, Color> = FxHashMap::default();
        let mut order: Vec<String> = Vec::new();

        colors.insert(start.to_string(), Color::InProgress);
        let mut stack = vec![DfsFrame {
            name: start.to_string(),
            neighbors: self.sorted_dependents(start),
            next: 0,
        }];

        while let Some(frame) = stack.last_mut() {
            if frame.next < frame.neighbors.len() {
                let child = frame.neighbors[frame.next].clone();
                frame.next += 1;

                match colors.get(&child) {
                    Some(Color::InProgress) => return Err(CycleDetected),
                    Some(Color::Done) => {}
                    None => {
                        colors.insert(child.clone(), Color::InProgress);
                        let neighbors = self.sorted_dependents(&child);
                        stack.push(DfsFrame {
                            name: child,
                            neighbors,
                            next: 0,
                        });
                    }
                }
            } else if let Some(finished) = stack.pop() {
                colors.insert(finished.name.clone(), Color::Done);
                order.push(finished.name);
            }
        }

        order.reverse();
        Ok(order)
    }

    fn sorted_dependents(&self, name: &str) -> Vec<String> {
        let mut neighbors: Vec<String> = self.deps.dependents(name).map(str::to_string).collect();
        neighbors.sort();
        neighbors
    }

    // =========================================================================
    // Recomputation
    // =========================================================================

    /// Re-evaluate one formula cell in place. Non-formula and absent cells
    /// are left alone. Evaluation failure is recorded as the cell's value
    /// and never interrupts the surrounding recomputation pass.
    fn recalculate(&mut self, name: &str) {
        let value = {
            let Some(cell) = self.cells.get(name) else { return };
            let CellContent::Formula(formula) = &cell.content else { return };

            let cells = &self.cells;
            match formula.evaluate(|var| cells.get(var).and_then(|c| c.value.as_number())) {
                Ok(n) => CellValue::Number(n),
                Err(e) => {
                    log::warn!("{name}: {e}");
                    CellValue::Error(e)
                }
            }
        };

        if let Some(cell) = self.cells.get_mut(name) {
            cell.value = value;
        }
    }

    fn canonical(&self, name: &str) -> Result<String, SpreadsheetError> {
        if self.is_valid_name(name) {
            Ok(cell_name::normalize(name))
        } else {
            Err(SpreadsheetError::InvalidName(name.to_string()))
        }
    }
}

impl Default for Spreadsheet {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::formula::{EvalError, ParseError};

    fn number(sheet: &Spreadsheet, name: &str) -> f64 {
        match sheet.get_cell_value(name).unwrap() {
            CellValue::Number(n) => n,
            other => panic!("{name} should be numeric, was {other:?}"),
        }
    }

    fn sorted(mut v: Vec<String>) -> Vec<String> {
        v.sort();
        v
    }

    #[test]
    fn test_empty_sheet_reads() {
        let sheet = Spreadsheet::new();
        assert_eq!(sheet.get_cell_contents("A1").unwrap(), CellContent::Empty);
        assert_eq!(
            sheet.get_cell_value("A1").unwrap(),
            CellValue::Text(String::new())
        );
        assert_eq!(sheet.cell_names().count(), 0);
        assert!(!sheet.is_modified());
    }

    #[test]
    fn test_invalid_names_rejected() {
        let mut sheet = Spreadsheet::new();
        for name in ["Z", "X07", "hello", "1A", ""] {
            assert_eq!(
                sheet.set_contents_of_cell(name, "5").unwrap_err(),
                SpreadsheetError::InvalidName(name.to_string())
            );
            assert!(sheet.get_cell_value(name).is_err());
            assert!(sheet.get_cell_contents(name).is_err());
        }
        assert_eq!(sheet.cell_names().count(), 0);
        assert!(!sheet.is_modified());
    }

    #[test]
    fn test_set_number() {
        let mut sheet = Spreadsheet::new();
        let affected = sheet.set_contents_of_cell("A1", "5").unwrap();
        assert_eq!(affected, vec!["A1"]);
        assert_eq!(sheet.get_cell_contents("A1").unwrap(), CellContent::Number(5.0));
        assert_eq!(number(&sheet, "A1"), 5.0);
        assert!(sheet.is_modified());
    }

    #[test]
    fn test_set_text() {
        let mut sheet = Spreadsheet::new();
        sheet.set_contents_of_cell("A1", "hello world").unwrap();
        assert_eq!(
            sheet.get_cell_contents("A1").unwrap(),
            CellContent::Text("hello world".to_string())
        );
        assert_eq!(
            sheet.get_cell_value("A1").unwrap(),
            CellValue::Text("hello world".to_string())
        );
    }

    #[test]
    fn test_names_are_case_insensitive() {
        let mut sheet = Spreadsheet::new();
        sheet.set_contents_of_cell("a1", "5").unwrap();
        assert_eq!(number(&sheet, "A1"), 5.0);
        assert_eq!(sheet.cell_names().collect::<Vec<_>>(), vec!["A1"]);

        // Formulas normalize their variables the same way.
        sheet.set_contents_of_cell("b1", "=a1*2").unwrap();
        assert_eq!(number(&sheet, "B1"), 10.0);
        assert_eq!(
            sheet.get_cell_contents("b1").unwrap().raw_text(),
            "=A1*2"
        );
    }

    #[test]
    fn test_formula_chain_propagates() {
        let mut sheet = Spreadsheet::new();
        sheet.set_contents_of_cell("A1", "2").unwrap();
        sheet.set_contents_of_cell("B1", "=A1*3").unwrap();
        sheet.set_contents_of_cell("C1", "=B1+1").unwrap();
        assert_eq!(number(&sheet, "C1"), 7.0);

        let affected = sheet.set_contents_of_cell("A1", "5").unwrap();
        assert_eq!(number(&sheet, "B1"), 15.0);
        assert_eq!(number(&sheet, "C1"), 16.0);
        assert_eq!(
            sorted(affected.clone()),
            vec!["A1".to_string(), "B1".to_string(), "C1".to_string()]
        );
        // Order contract: edited cell first, dependees before dependents.
        assert_eq!(affected, vec!["A1", "B1", "C1"]);
    }

    #[test]
    fn test_diamond_recomputes_join_last() {
        let mut sheet = Spreadsheet::new();
        sheet.set_contents_of_cell("A1", "1").unwrap();
        sheet.set_contents_of_cell("B1", "=A1*2").unwrap();
        sheet.set_contents_of_cell("C1", "=A1+3").unwrap();
        sheet.set_contents_of_cell("D1", "=B1+C1").unwrap();

        let affected = sheet.set_contents_of_cell("A1", "2").unwrap();
        assert_eq!(affected[0], "A1");
        let pos = |name: &str| affected.iter().position(|c| c == name).unwrap();
        assert!(pos("B1") < pos("D1"));
        assert!(pos("C1") < pos("D1"));
        assert_eq!(number(&sheet, "D1"), 9.0);
    }

    #[test]
    fn test_formula_set_returns_itself_first() {
        let mut sheet = Spreadsheet::new();
        sheet.set_contents_of_cell("A1", "4").unwrap();
        let affected = sheet.set_contents_of_cell("B1", "=A1/2").unwrap();
        assert_eq!(affected, vec!["B1"]);
        assert_eq!(number(&sheet, "B1"), 2.0);
    }

    #[test]
    fn test_direct_cycle_rejected_atomically() {
        let mut sheet = Spreadsheet::new();
        sheet.set_contents_of_cell("A1", "=B1").unwrap();
        let err = sheet.set_contents_of_cell("B1", "=A1").unwrap_err();
        assert_eq!(err, SpreadsheetError::Circular("B1".to_string()));

        // B1 is exactly as before the failed call.
        assert_eq!(sheet.get_cell_contents("B1").unwrap(), CellContent::Empty);

        // A1's edge on B1 survived the rollback: giving B1 a value flows
        // into A1.
        sheet.set_contents_of_cell("B1", "3").unwrap();
        assert_eq!(number(&sheet, "A1"), 3.0);
    }

    #[test]
    fn test_self_reference_rejected() {
        let mut sheet = Spreadsheet::new();
        let err = sheet.set_contents_of_cell("A1", "=A1+1").unwrap_err();
        assert_eq!(err, SpreadsheetError::Circular("A1".to_string()));
        assert_eq!(sheet.get_cell_contents("A1").unwrap(), CellContent::Empty);
    }

    #[test]
    fn test_cycle_rollback_restores_old_dependees() {
        let mut sheet = Spreadsheet::new();
        sheet.set_contents_of_cell("B1", "=A1").unwrap();
        sheet.set_contents_of_cell("C1", "=B1").unwrap();

        // B1 = C1 + A1 would close B1 -> C1 -> B1.
        assert!(matches!(
            sheet.set_contents_of_cell("B1", "=C1+A1").unwrap_err(),
            SpreadsheetError::Circular(_)
        ));

        // B1 still holds and reacts through its previous formula.
        assert_eq!(sheet.get_cell_contents("B1").unwrap().raw_text(), "=A1");
        sheet.set_contents_of_cell("A1", "2").unwrap();
        assert_eq!(number(&sheet, "B1"), 2.0);
        assert_eq!(number(&sheet, "C1"), 2.0);
    }

    #[test]
    fn test_longer_cycle_rejected() {
        let mut sheet = Spreadsheet::new();
        sheet.set_contents_of_cell("A1", "=B1*2").unwrap();
        sheet.set_contents_of_cell("B1", "=C1*2").unwrap();
        assert!(matches!(
            sheet.set_contents_of_cell("C1", "=A1*2").unwrap_err(),
            SpreadsheetError::Circular(_)
        ));
        assert_eq!(sheet.get_cell_contents("C1").unwrap(), CellContent::Empty);
    }

    #[test]
    fn test_evaluation_errors_are_values_not_errors() {
        let mut sheet = Spreadsheet::new();
        sheet.set_contents_of_cell("A1", "text").unwrap();
        // The mutation succeeds even though the formula cannot evaluate.
        sheet.set_contents_of_cell("B1", "=A1*2").unwrap();

        assert_eq!(
            sheet.get_cell_value("B1").unwrap(),
            CellValue::Error(EvalError::UndefinedVariable("A1".to_string()))
        );
        // A1 itself is unaffected.
        assert_eq!(
            sheet.get_cell_value("A1").unwrap(),
            CellValue::Text("text".to_string())
        );
    }

    #[test]
    fn test_divide_by_zero_value() {
        let mut sheet = Spreadsheet::new();
        sheet.set_contents_of_cell("A1", "0").unwrap();
        sheet.set_contents_of_cell("B1", "=1/A1").unwrap();
        assert_eq!(
            sheet.get_cell_value("B1").unwrap(),
            CellValue::Error(EvalError::DivideByZero)
        );

        // Fixing the divisor repairs the dependent on the next edit.
        sheet.set_contents_of_cell("A1", "4").unwrap();
        assert_eq!(number(&sheet, "B1"), 0.25);
    }

    #[test]
    fn test_error_cell_is_undefined_to_its_dependents() {
        let mut sheet = Spreadsheet::new();
        sheet.set_contents_of_cell("B1", "=Z9*2").unwrap();
        sheet.set_contents_of_cell("C1", "=B1+1").unwrap();
        // B1 is an error, so C1 sees it as undefined.
        assert_eq!(
            sheet.get_cell_value("C1").unwrap(),
            CellValue::Error(EvalError::UndefinedVariable("B1".to_string()))
        );
    }

    #[test]
    fn test_sibling_recomputation_survives_errors() {
        let mut sheet = Spreadsheet::new();
        sheet.set_contents_of_cell("A1", "2").unwrap();
        sheet.set_contents_of_cell("B1", "=A1/0").unwrap();
        sheet.set_contents_of_cell("C1", "=A1*2").unwrap();

        let affected = sheet.set_contents_of_cell("A1", "3").unwrap();
        assert_eq!(sorted(affected), vec!["A1", "B1", "C1"]);
        assert!(sheet.get_cell_value("B1").unwrap().is_error());
        assert_eq!(number(&sheet, "C1"), 6.0);
    }

    #[test]
    fn test_replacing_formula_rewires_dependencies() {
        let mut sheet = Spreadsheet::new();
        sheet.set_contents_of_cell("A1", "1").unwrap();
        sheet.set_contents_of_cell("C1", "10").unwrap();
        sheet.set_contents_of_cell("B1", "=A1*2").unwrap();

        sheet.set_contents_of_cell("B1", "=C1+1").unwrap();
        assert_eq!(number(&sheet, "B1"), 11.0);

        // A1 no longer affects B1.
        let affected = sheet.set_contents_of_cell("A1", "99").unwrap();
        assert_eq!(affected, vec!["A1"]);
        assert_eq!(number(&sheet, "B1"), 11.0);
    }

    #[test]
    fn test_number_overwriting_formula_clears_edges() {
        let mut sheet = Spreadsheet::new();
        sheet.set_contents_of_cell("A1", "1").unwrap();
        sheet.set_contents_of_cell("B1", "=A1").unwrap();

        sheet.set_contents_of_cell("B1", "7").unwrap();
        let affected = sheet.set_contents_of_cell("A1", "9").unwrap();
        assert_eq!(affected, vec!["A1"]);
        assert_eq!(number(&sheet, "B1"), 7.0);
    }

    #[test]
    fn test_clearing_a_cell() {
        let mut sheet = Spreadsheet::new();
        sheet.set_contents_of_cell("A1", "5").unwrap();
        sheet.set_contents_of_cell("B1", "=A1*2").unwrap();

        let affected = sheet.set_contents_of_cell("A1", "").unwrap();
        assert_eq!(affected, vec!["A1", "B1"]);
        assert_eq!(sheet.get_cell_contents("A1").unwrap(), CellContent::Empty);
        assert_eq!(sorted(sheet.cell_names().map(str::to_string).collect()), vec!["B1"]);
        // B1 now references an empty cell.
        assert!(sheet.get_cell_value("B1").unwrap().is_error());
    }

    #[test]
    fn test_bare_equals_is_an_empty_formula() {
        let mut sheet = Spreadsheet::new();
        assert_eq!(
            sheet.set_contents_of_cell("A1", "=").unwrap_err(),
            SpreadsheetError::Formula(ParseError::Empty)
        );
        assert_eq!(sheet.get_cell_contents("A1").unwrap(), CellContent::Empty);
    }

    #[test]
    fn test_malformed_formula_leaves_cell_alone() {
        let mut sheet = Spreadsheet::new();
        sheet.set_contents_of_cell("A1", "5").unwrap();
        assert!(matches!(
            sheet.set_contents_of_cell("A1", "=2+").unwrap_err(),
            SpreadsheetError::Formula(ParseError::TrailingOperator)
        ));
        assert_eq!(sheet.get_cell_contents("A1").unwrap(), CellContent::Number(5.0));
    }

    #[test]
    fn test_formula_variable_must_be_valid_cell_name() {
        let mut sheet = Spreadsheet::new();
        // "XY" has no digits, so it is not a cell name.
        assert!(matches!(
            sheet.set_contents_of_cell("A1", "=XY+1").unwrap_err(),
            SpreadsheetError::Formula(ParseError::InvalidVariable(_))
        ));
    }

    #[test]
    fn test_injected_validator_narrows_names() {
        let only_column_a = Regex::new("^A[1-9][0-9]*$").unwrap();
        let mut sheet = Spreadsheet::with_validator(only_column_a);

        sheet.set_contents_of_cell("A1", "5").unwrap();
        assert_eq!(
            sheet.set_contents_of_cell("B1", "5").unwrap_err(),
            SpreadsheetError::InvalidName("B1".to_string())
        );
        // Validator applies to formula variables too.
        assert!(matches!(
            sheet.set_contents_of_cell("A2", "=B1*2").unwrap_err(),
            SpreadsheetError::Formula(ParseError::InvalidVariable(_))
        ));
    }

    #[test]
    fn test_modified_flag_lifecycle() {
        let mut sheet = Spreadsheet::new();
        assert!(!sheet.is_modified());

        sheet.set_contents_of_cell("A1", "5").unwrap();
        assert!(sheet.is_modified());

        sheet.mark_saved();
        assert!(!sheet.is_modified());

        // Failed edits do not mark the sheet modified.
        let _ = sheet.set_contents_of_cell("bad name", "1");
        assert!(!sheet.is_modified());

        sheet.set_contents_of_cell("A1", "").unwrap();
        assert!(sheet.is_modified());
    }

    #[test]
    fn test_ten_term_chain() {
        // A Fibonacci-style chain: each cell sums the previous two.
        let mut sheet = Spreadsheet::new();
        sheet.set_contents_of_cell("F1", "1").unwrap();
        sheet.set_contents_of_cell("F2", "1").unwrap();
        for i in 3..=10 {
            let formula = format!("=F{}+F{}", i - 1, i - 2);
            sheet.set_contents_of_cell(&format!("F{i}"), &formula).unwrap();
        }
        assert_eq!(number(&sheet, "F10"), 55.0);

        // Changing a seed re-ripples the chain. F2 holds no reference to F1,
        // so it sits outside the affected set.
        let affected = sheet.set_contents_of_cell("F1", "2").unwrap();
        assert_eq!(affected.len(), 9);
        assert_eq!(number(&sheet, "F10"), 76.0);
    }
}
