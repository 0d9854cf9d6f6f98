use std::fmt::Display;

/// Expression tree.
///
/// Every node owns its children, so arity is fixed by the variant: `Number` is a leaf, the
/// four arithmetic operators are binary and the rest are unary.
#[derive(Debug, Clone, PartialEq)]
pub enum Expr {
    Number(f64),

    Add(Box<Expr>, Box<Expr>),
    Sub(Box<Expr>, Box<Expr>),
    Mul(Box<Expr>, Box<Expr>),
    Div(Box<Expr>, Box<Expr>),

    Negate(Box<Expr>),
    /// Unary `+`. Evaluates to the magnitude of its operand.
    Identity(Box<Expr>),
    Floor(Box<Expr>),
    Ceil(Box<Expr>),
}

/// Node kinds, without payload.
#[derive(Debug, PartialEq, Eq, Clone, Copy, Hash)]
pub enum ExprKind {
    Number,
    Add,
    Sub,
    Mul,
    Div,
    Negate,
    Identity,
    Floor,
    Ceil,
}

impl Expr {
    pub fn kind(&self) -> ExprKind {
        match self {
            Expr::Number(_) => ExprKind::Number,
            Expr::Add(..) => ExprKind::Add,
            Expr::Sub(..) => ExprKind::Sub,
            Expr::Mul(..) => ExprKind::Mul,
            Expr::Div(..) => ExprKind::Div,
            Expr::Negate(_) => ExprKind::Negate,
            Expr::Identity(_) => ExprKind::Identity,
            Expr::Floor(_) => ExprKind::Floor,
            Expr::Ceil(_) => ExprKind::Ceil,
        }
    }

    /// Left operand of a binary node, or the operand of a unary node.
    pub fn left(&self) -> Option<&Expr> {
        match self {
            Expr::Number(_) => None,
            Expr::Add(left, _) | Expr::Sub(left, _) | Expr::Mul(left, _) | Expr::Div(left, _) => {
                Some(left.as_ref())
            }
            Expr::Negate(operand)
            | Expr::Identity(operand)
            | Expr::Floor(operand)
            | Expr::Ceil(operand) => Some(operand.as_ref()),
        }
    }

    pub fn right(&self) -> Option<&Expr> {
        match self {
            Expr::Add(_, right) | Expr::Sub(_, right) | Expr::Mul(_, right) | Expr::Div(_, right) => {
                Some(right.as_ref())
            }
            _ => None,
        }
    }

    pub fn arity(&self) -> usize {
        self.left().is_some() as usize + self.right().is_some() as usize
    }

    /// Nodes in evaluation order: children before their parent, left before right.
    pub fn post_order(&self) -> Vec<&Expr> {
        let mut nodes = vec![];
        self.collect_post_order(&mut nodes);
        nodes
    }

    fn collect_post_order<'a>(&'a self, nodes: &mut Vec<&'a Expr>) {
        if let Some(left) = self.left() {
            left.collect_post_order(nodes);
        }
        if let Some(right) = self.right() {
            right.collect_post_order(nodes);
        }
        nodes.push(self);
    }
}

/// Fully parenthesized rendering, so grouping is visible: `1 - 2 - 3` prints as
/// `((1 - 2) - 3)`.
impl Display for Expr {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Expr::Number(value) => write!(f, "{}", value),
            Expr::Add(left, right) => write!(f, "({} + {})", left, right),
            Expr::Sub(left, right) => write!(f, "({} - {})", left, right),
            Expr::Mul(left, right) => write!(f, "({} * {})", left, right),
            Expr::Div(left, right) => write!(f, "({} / {})", left, right),
            Expr::Negate(operand) => write!(f, "-{}", operand),
            Expr::Identity(operand) => write!(f, "+{}", operand),
            Expr::Floor(operand) => write!(f, "floor({})", operand),
            Expr::Ceil(operand) => write!(f, "ceil({})", operand),
        }
    }
}
