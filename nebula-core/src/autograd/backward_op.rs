/// The operation that produced a node, and with it the node's gradient rule.
///
/// Every derived node stores one of these instead of a closure. Variants
/// whose derivative depends on the forward result capture that result at
/// creation time (`output`), so the backward pass never recomputes it.
///
/// Given the operand values and the node's own accumulated gradient `g`,
/// [`Op::contributions`] returns what must be added to each operand's
/// gradient:
///
/// | Op | Forward | Contribution to operand 0 | Contribution to operand 1 |
/// |---|---|---|---|
/// | `Add` | a+b | g | g |
/// | `Sub` | a−b | g | −g |
/// | `Mul` | a·b | b·g | a·g |
/// | `Div` | a/b | g/b | −a·g/b² |
/// | `Pow` | a^b | b·a^(b−1)·g | ln(a)·a^b·g |
/// | `Neg` | −a | −g | |
/// | `Exp` | e^a | e^a·g | |
/// | `Ln` | ln a | g/a | |
/// | `Sigmoid` | σ(a) | σ·(1−σ)·g | |
/// | `Relu` | max(a, 0) | g if output > 0, else 0 | |
/// | `Tanh` | tanh a | (1−t²)·g | |
///
/// `Pow`'s exponent branch requires a positive base. With `a <= 0` it
/// yields NaN (or infinity) by IEEE-754 rules.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Op {
    /// A node created from a literal. No operands, no rule.
    Leaf,
    Add,
    Sub,
    Mul,
    Div,
    Pow { output: f64 },
    Neg,
    Exp { output: f64 },
    Ln,
    Sigmoid { output: f64 },
    Relu { output: f64 },
    Tanh { output: f64 },
}

impl Op {
    /// Number of operands a node with this op holds.
    pub fn arity(&self) -> usize {
        match self {
            Op::Leaf => 0,
            Op::Add | Op::Sub | Op::Mul | Op::Div | Op::Pow { .. } => 2,
            Op::Neg
            | Op::Exp { .. }
            | Op::Ln
            | Op::Sigmoid { .. }
            | Op::Relu { .. }
            | Op::Tanh { .. } => 1,
        }
    }

    pub fn is_leaf(&self) -> bool {
        matches!(self, Op::Leaf)
    }

    /// Short lowercase name, used by the `Display` impls.
    pub fn name(&self) -> &'static str {
        match self {
            Op::Leaf => "leaf",
            Op::Add => "add",
            Op::Sub => "sub",
            Op::Mul => "mul",
            Op::Div => "div",
            Op::Pow { .. } => "pow",
            Op::Neg => "neg",
            Op::Exp { .. } => "exp",
            Op::Ln => "ln",
            Op::Sigmoid { .. } => "sigmoid",
            Op::Relu { .. } => "relu",
            Op::Tanh { .. } => "tanh",
        }
    }

    /// Computes the amount to add to each operand's gradient.
    ///
    /// `inputs` holds the operand values in argument order and `upstream`
    /// is the gradient already accumulated on the node carrying this op.
    /// The returned vector has one entry per operand, in the same order.
    ///
    /// # Panics
    /// Panics if `inputs.len()` is smaller than [`Op::arity`].
    pub fn contributions(&self, inputs: &[f64], upstream: f64) -> Vec<f64> {
        let g = upstream;
        match *self {
            Op::Leaf => vec![],
            Op::Add => vec![g, g],
            Op::Sub => vec![g, -g],
            Op::Mul => {
                let (a, b) = (inputs[0], inputs[1]);
                vec![b * g, a * g]
            }
            Op::Div => {
                let (a, b) = (inputs[0], inputs[1]);
                vec![g / b, -a * g / (b * b)]
            }
            Op::Pow { output } => {
                let (a, b) = (inputs[0], inputs[1]);
                vec![b * a.powf(b - 1.0) * g, a.ln() * output * g]
            }
            Op::Neg => vec![-g],
            Op::Exp { output } => vec![output * g],
            Op::Ln => vec![g / inputs[0]],
            Op::Sigmoid { output } => vec![output * (1.0 - output) * g],
            // Exactly zero on the inactive side, even when g is not finite.
            Op::Relu { output } => vec![if output > 0.0 { g } else { 0.0 }],
            Op::Tanh { output } => vec![(1.0 - output * output) * g],
        }
    }
}
