//! A minimal Standard Honk circuit builder, sufficient to produce the
//! execution traces the verifier tests exercise.
//!
//! The trace layout places one row per public input at the top of the trace,
//! followed by one row per gate. Copy constraints are tracked as an
//! equivalence relation over variables; committed permutation polynomials
//! encode the copy cycles positionally, with public input wires cut out of
//! their cycles and mapped to external values.

use std::collections::HashMap;

use ark_ff::{One, Zero};
use honk_common::{
    constants::{NUM_PRECOMPUTED_POLYNOMIALS, NUM_SELECTORS, PROGRAM_WIDTH},
    types::ScalarField,
};

/// The smallest trace the arithmetization supports
const MIN_CIRCUIT_SIZE: usize = 4;

/// An addition gate constraint:
///
/// a_scaling * a + b_scaling * b + c_scaling * c + const_scaling = 0
pub struct AddTriple {
    /// The left wire variable
    pub a: usize,
    /// The right wire variable
    pub b: usize,
    /// The output wire variable
    pub c: usize,
    /// The left wire selector value
    pub a_scaling: ScalarField,
    /// The right wire selector value
    pub b_scaling: ScalarField,
    /// The output wire selector value
    pub c_scaling: ScalarField,
    /// The constant selector value
    pub const_scaling: ScalarField,
}

/// A multiplication gate constraint:
///
/// mul_scaling * a * b + c_scaling * c + const_scaling = 0
pub struct MulTriple {
    /// The left wire variable
    pub a: usize,
    /// The right wire variable
    pub b: usize,
    /// The output wire variable
    pub c: usize,
    /// The multiplication selector value
    pub mul_scaling: ScalarField,
    /// The output wire selector value
    pub c_scaling: ScalarField,
    /// The constant selector value
    pub const_scaling: ScalarField,
}

/// A single gate row of the trace: its wire assignments and selector values
struct Gate {
    /// The variables assigned to the gate's wires
    wires: [usize; PROGRAM_WIDTH],
    /// The gate's selector values, in batching order
    selectors: [ScalarField; NUM_SELECTORS],
}

/// The circuit builder: accumulates variables, gates, and copy constraints
pub struct CircuitBuilder {
    /// The values of the circuit's variables
    variables: Vec<ScalarField>,
    /// Union-find parent pointers for the copy constraint
    /// equivalence classes
    parents: Vec<usize>,
    /// The variables exposed as public inputs, in order
    public_inputs: Vec<usize>,
    /// The circuit's gates, in order
    gates: Vec<Gate>,
    /// Previously created constant variables, by value
    constants: HashMap<ScalarField, usize>,
}

impl CircuitBuilder {
    /// Creates an empty circuit
    #[allow(clippy::new_without_default)]
    pub fn new() -> Self {
        CircuitBuilder {
            variables: Vec::new(),
            parents: Vec::new(),
            public_inputs: Vec::new(),
            gates: Vec::new(),
            constants: HashMap::new(),
        }
    }

    /// Adds a witness variable with the given value
    pub fn add_variable(&mut self, value: ScalarField) -> usize {
        let index = self.variables.len();
        self.variables.push(value);
        self.parents.push(index);
        index
    }

    /// Adds a witness variable and exposes it as a public input
    pub fn add_public_variable(&mut self, value: ScalarField) -> usize {
        let index = self.add_variable(value);
        self.public_inputs.push(index);
        index
    }

    /// Returns a variable fixed to the given constant, creating it and its
    /// constraining gate on first use
    pub fn put_constant_variable(&mut self, value: ScalarField) -> usize {
        if let Some(&index) = self.constants.get(&value) {
            return index;
        }

        let index = self.add_variable(value);
        let mut selectors = [ScalarField::zero(); NUM_SELECTORS];
        selectors[1] = ScalarField::one(); // q_l
        selectors[4] = -value; // q_c
        self.gates.push(Gate {
            wires: [index; PROGRAM_WIDTH],
            selectors,
        });

        self.constants.insert(value, index);
        index
    }

    /// Constrains two variables to be equal by merging their copy cycles.
    ///
    /// The variables' assigned values must already agree.
    pub fn assert_equal(&mut self, a: usize, b: usize) {
        let root_a = self.find(a);
        let root_b = self.find(b);
        debug_assert_eq!(self.variables[root_a], self.variables[root_b]);
        if root_a != root_b {
            self.parents[root_b] = root_a;
        }
    }

    /// Adds an addition gate
    pub fn create_add_gate(&mut self, triple: &AddTriple) {
        self.gates.push(Gate {
            wires: [triple.a, triple.b, triple.c],
            selectors: [
                ScalarField::zero(),
                triple.a_scaling,
                triple.b_scaling,
                triple.c_scaling,
                triple.const_scaling,
            ],
        });
    }

    /// Adds a multiplication gate
    pub fn create_mul_gate(&mut self, triple: &MulTriple) {
        self.gates.push(Gate {
            wires: [triple.a, triple.b, triple.c],
            selectors: [
                triple.mul_scaling,
                ScalarField::zero(),
                ScalarField::zero(),
                triple.c_scaling,
                triple.const_scaling,
            ],
        });
    }

    /// The size of the evaluation domain: the number of trace rows rounded
    /// up to a power of two
    pub fn circuit_size(&self) -> usize {
        MIN_CIRCUIT_SIZE.max((self.public_inputs.len() + self.gates.len()).next_power_of_two())
    }

    /// Resolves a variable to its copy cycle representative
    fn find(&self, mut index: usize) -> usize {
        while self.parents[index] != index {
            index = self.parents[index];
        }
        index
    }

    /// The value assigned to a variable's copy cycle
    fn value(&self, index: usize) -> ScalarField {
        self.variables[self.find(index)]
    }

    /// Computes the full execution trace: wire values, selector values, and
    /// the permutation, identity, and Lagrange indicator polynomials
    pub fn compute_circuit_polynomials(&self) -> CircuitPolynomials {
        let n = self.circuit_size();
        let num_public = self.public_inputs.len();

        let mut selectors: [Vec<ScalarField>; NUM_SELECTORS] =
            std::array::from_fn(|_| vec![ScalarField::zero(); n]);
        let mut wires: [Vec<ScalarField>; PROGRAM_WIDTH] =
            std::array::from_fn(|_| vec![ScalarField::zero(); n]);
        // The variable occupying each trace cell; unoccupied cells stay out
        // of the copy cycles entirely
        let mut wire_variables: [Vec<Option<usize>>; PROGRAM_WIDTH] =
            std::array::from_fn(|_| vec![None; n]);

        // Public input rows: the input value on the first two wires,
        // all selectors zero
        for (row, &variable) in self.public_inputs.iter().enumerate() {
            let value = self.value(variable);
            for wire in 0..2 {
                wires[wire][row] = value;
                wire_variables[wire][row] = Some(variable);
            }
        }

        // Gate rows follow the public input rows
        for (gate_index, gate) in self.gates.iter().enumerate() {
            let row = num_public + gate_index;
            for wire in 0..PROGRAM_WIDTH {
                let variable = gate.wires[wire];
                wires[wire][row] = self.value(variable);
                wire_variables[wire][row] = Some(variable);
            }
            for (selector, value) in selectors.iter_mut().zip(gate.selectors.iter()) {
                selector[row] = *value;
            }
        }

        // Collect the copy cycles in row-major order, so that a public
        // input's cycle begins with its two public row cells
        let mut cycles: HashMap<usize, Vec<(usize, usize)>> = HashMap::new();
        for row in 0..n {
            for wire in 0..PROGRAM_WIDTH {
                if let Some(variable) = wire_variables[wire][row] {
                    cycles
                        .entry(self.find(variable))
                        .or_default()
                        .push((wire, row));
                }
            }
        }

        // Each cell's permutation image is the next cell of its cycle;
        // unoccupied cells map to themselves
        let mut sigmas: [Vec<ScalarField>; PROGRAM_WIDTH] = std::array::from_fn(|wire| {
            (0..n)
                .map(|row| ScalarField::from((wire * n + row) as u64))
                .collect()
        });
        for positions in cycles.values() {
            for (position_index, &(wire, row)) in positions.iter().enumerate() {
                let (next_wire, next_row) = positions[(position_index + 1) % positions.len()];
                sigmas[wire][row] = ScalarField::from((next_wire * n + next_row) as u64);
            }
        }

        // Cut the public input wires out of their cycles: the first wire's
        // image on row i becomes the external value -(i + 1) instead of the
        // second wire's cell, breaking the in-trace cycle
        for row in 0..num_public {
            sigmas[0][row] = -ScalarField::from(row as u64 + 1);
        }

        let ids: [Vec<ScalarField>; PROGRAM_WIDTH] = std::array::from_fn(|wire| {
            (0..n)
                .map(|row| ScalarField::from((wire * n + row) as u64))
                .collect()
        });

        let mut lagrange_first = vec![ScalarField::zero(); n];
        lagrange_first[0] = ScalarField::one();
        let mut lagrange_last = vec![ScalarField::zero(); n];
        lagrange_last[n - 1] = ScalarField::one();

        CircuitPolynomials {
            circuit_size: n,
            public_inputs: self.public_inputs.iter().map(|&v| self.value(v)).collect(),
            selectors,
            sigmas,
            ids,
            lagrange_first,
            lagrange_last,
            wires,
        }
    }
}

/// The execution trace of a circuit, as the polynomials the protocol
/// commits to
pub struct CircuitPolynomials {
    /// The size of the evaluation domain
    pub circuit_size: usize,
    /// The public input values, in order
    pub public_inputs: Vec<ScalarField>,
    /// The selector polynomials, in batching order
    pub selectors: [Vec<ScalarField>; NUM_SELECTORS],
    /// The permutation polynomials
    pub sigmas: [Vec<ScalarField>; PROGRAM_WIDTH],
    /// The wire identity polynomials
    pub ids: [Vec<ScalarField>; PROGRAM_WIDTH],
    /// The first-row Lagrange indicator polynomial
    pub lagrange_first: Vec<ScalarField>,
    /// The last-row Lagrange indicator polynomial
    pub lagrange_last: Vec<ScalarField>,
    /// The wire polynomials
    pub wires: [Vec<ScalarField>; PROGRAM_WIDTH],
}

impl CircuitPolynomials {
    /// The precomputed polynomials in batching order, matching the
    /// verification key's commitment layout
    pub fn precomputed(&self) -> Vec<&Vec<ScalarField>> {
        let mut polys = Vec::with_capacity(NUM_PRECOMPUTED_POLYNOMIALS);
        polys.extend(self.selectors.iter());
        polys.extend(self.sigmas.iter());
        polys.extend(self.ids.iter());
        polys.push(&self.lagrange_first);
        polys.push(&self.lagrange_last);
        polys
    }
}

#[cfg(test)]
mod tests {
    use ark_ff::{One, Zero};
    use ark_std::UniformRand;
    use honk_common::{constants::PROGRAM_WIDTH, types::ScalarField};
    use honk_core::public_inputs::compute_public_input_delta;
    use rand::thread_rng;

    use crate::proof_system::test_data::sample_circuit;

    use super::{AddTriple, CircuitBuilder};

    /// Public input wires map to the external values -(i + 1)
    #[test]
    fn test_public_input_sigmas() {
        let builder = sample_circuit();
        let polys = builder.compute_circuit_polynomials();

        for row in 0..polys.public_inputs.len() {
            assert_eq!(
                polys.sigmas[0][row],
                -ScalarField::from(row as u64 + 1),
            );
        }
    }

    /// The permutation grand product telescopes to the public input
    /// correction factor
    #[test]
    fn test_grand_product_identity() {
        let mut rng = thread_rng();
        let builder = sample_circuit();
        let polys = builder.compute_circuit_polynomials();
        let n = polys.circuit_size;

        let beta = ScalarField::rand(&mut rng);
        let gamma = ScalarField::rand(&mut rng);

        let mut numerator = ScalarField::one();
        let mut denominator = ScalarField::one();
        for wire in 0..PROGRAM_WIDTH {
            for row in 0..n {
                numerator *= polys.wires[wire][row] + beta * polys.ids[wire][row] + gamma;
                denominator *= polys.wires[wire][row] + beta * polys.sigmas[wire][row] + gamma;
            }
        }

        let delta =
            compute_public_input_delta(&polys.public_inputs, beta, gamma, n as u64).unwrap();
        assert_eq!(numerator, denominator * delta);
    }

    /// `assert_equal` merges the copy cycles of its operands
    #[test]
    fn test_assert_equal_merges_cycles() {
        let mut builder = CircuitBuilder::new();
        let one = ScalarField::one();
        let five = ScalarField::from(5u64);

        let x = builder.add_variable(five);
        let y = builder.add_variable(five);
        // One gate pinning each variable's value
        for &variable in [x, y].iter() {
            builder.create_add_gate(&AddTriple {
                a: variable,
                b: variable,
                c: variable,
                a_scaling: one,
                b_scaling: ScalarField::zero(),
                c_scaling: ScalarField::zero(),
                const_scaling: -five,
            });
        }
        builder.assert_equal(x, y);

        let polys = builder.compute_circuit_polynomials();
        let n = polys.circuit_size;

        // The merged cycle spans both gates' wire cells: row-major order
        // visits (wire 0, row 0), (wire 1, row 0), (wire 2, row 0),
        // (wire 0, row 1), ..., and each cell maps to the next
        assert_eq!(polys.sigmas[2][0], ScalarField::from(1u64)); // -> (wire 0, row 1)
        assert_eq!(polys.sigmas[2][1], ScalarField::from(0u64)); // wraps to (wire 0, row 0)
        assert_eq!(polys.sigmas[0][0], ScalarField::from(n as u64)); // -> (wire 1, row 0)
    }
}
