use crate::literal::Literal;
use crate::token::Token;

/// Represents an expression in the language.
///
/// `Variable`, `Assign`, `This` and `Super` carry a stable `id` assigned by
/// the parser. The resolver keys its scope-distance side-table on these ids,
/// so two syntactically identical references resolve independently.
#[derive(Debug, PartialEq, Clone)]
pub enum Expr {
    Literal(Literal),
    Grouping(GroupingData),
    Unary(UnaryData),
    Binary(BinaryData),
    Logical(LogicalData),
    Variable(VariableData),
    Assign(AssignData),
    Call(CallData),
    Get(GetData),
    Set(SetData),
    This(ThisData),
    Super(SuperData),
}

#[derive(Debug, PartialEq, Clone)]
pub struct GroupingData {
    pub expr: Box<Expr>,
}

#[derive(Debug, PartialEq, Clone)]
pub struct UnaryData {
    pub operator: Token,
    pub expr: Box<Expr>,
}

#[derive(Debug, PartialEq, Clone)]
pub struct BinaryData {
    pub left: Box<Expr>,
    pub operator: Token,
    pub right: Box<Expr>,
}

/// Short-circuiting `and`/`or`.
#[derive(Debug, PartialEq, Clone)]
pub struct LogicalData {
    pub left: Box<Expr>,
    pub operator: Token,
    pub right: Box<Expr>,
}

#[derive(Debug, PartialEq, Clone)]
pub struct VariableData {
    pub id: usize,
    pub name: Token,
}

#[derive(Debug, PartialEq, Clone)]
pub struct AssignData {
    pub id: usize,
    pub name: Token,
    pub value: Box<Expr>,
}

#[derive(Debug, PartialEq, Clone)]
pub struct CallData {
    pub callee: Box<Expr>,
    pub paren: Token, // Closing parenthesis, used for error locations.
    pub arguments: Vec<Expr>,
}

/// Property read.
#[derive(Debug, PartialEq, Clone)]
pub struct GetData {
    pub object: Box<Expr>,
    pub name: Token,
}

/// Property write.
#[derive(Debug, PartialEq, Clone)]
pub struct SetData {
    pub object: Box<Expr>,
    pub name: Token,
    pub value: Box<Expr>,
}

#[derive(Debug, PartialEq, Clone)]
pub struct ThisData {
    pub id: usize,
    pub keyword: Token,
}

#[derive(Debug, PartialEq, Clone)]
pub struct SuperData {
    pub id: usize,
    pub keyword: Token,
    pub method: Token,
}

impl Expr {
    /// Accepts a visitor and returns the result of the visit.
    pub fn accept<T>(&self, visitor: &mut dyn ExprVisitor<T>) -> T {
        match self {
            Expr::Literal(literal) => visitor.visit_literal_expr(literal),
            Expr::Grouping(grouping) => visitor.visit_grouping_expr(grouping),
            Expr::Unary(unary) => visitor.visit_unary_expr(unary),
            Expr::Binary(binary) => visitor.visit_binary_expr(binary),
            Expr::Logical(logical) => visitor.visit_logical_expr(logical),
            Expr::Variable(variable) => visitor.visit_variable_expr(variable),
            Expr::Assign(assign) => visitor.visit_assign_expr(assign),
            Expr::Call(call) => visitor.visit_call_expr(call),
            Expr::Get(get) => visitor.visit_get_expr(get),
            Expr::Set(set) => visitor.visit_set_expr(set),
            Expr::This(this) => visitor.visit_this_expr(this),
            Expr::Super(super_expr) => visitor.visit_super_expr(super_expr),
        }
    }
}

pub trait ExprVisitor<T> {
    fn visit_literal_expr(&mut self, literal: &Literal) -> T;
    fn visit_grouping_expr(&mut self, grouping: &GroupingData) -> T;
    fn visit_unary_expr(&mut self, unary: &UnaryData) -> T;
    fn visit_binary_expr(&mut self, binary: &BinaryData) -> T;
    fn visit_logical_expr(&mut self, logical: &LogicalData) -> T;
    fn visit_variable_expr(&mut self, variable: &VariableData) -> T;
    fn visit_assign_expr(&mut self, assign: &AssignData) -> T;
    fn visit_call_expr(&mut self, call: &CallData) -> T;
    fn visit_get_expr(&mut self, get: &GetData) -> T;
    fn visit_set_expr(&mut self, set: &SetData) -> T;
    fn visit_this_expr(&mut self, this: &ThisData) -> T;
    fn visit_super_expr(&mut self, super_expr: &SuperData) -> T;
}
