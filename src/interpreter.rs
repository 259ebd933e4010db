use std::cell::RefCell;
use std::collections::HashMap;
use std::io::Write;
use std::mem;
use std::rc::Rc;

use crate::class::{Class, Instance};
use crate::environment::Environment;
use crate::error::{Error, Reporter, RuntimeError, Unwind};
use crate::expr::*;
use crate::function::{Function, NativeFunction};
use crate::literal::Literal;
use crate::object::{Callable, Object};
use crate::stmt::*;
use crate::token::{Token, Type};

type EvalResult = Result<Object, RuntimeError>;
type ExecResult = Result<(), Unwind>;

/// Walks the AST and evaluates it.
///
/// The interpreter owns the global frame, the current frame and the
/// resolution side-table written by the resolver. Statements execute for
/// their side effects and propagate unwinds; expressions evaluate to an
/// [`Object`]. Evaluation is strict and left-to-right at every position.
pub struct Interpreter<'a> {
    pub globals: Rc<RefCell<Environment>>,
    environment: Rc<RefCell<Environment>>,
    locals: HashMap<usize, usize>,
    output: &'a mut dyn Write,
}

impl<'a> Interpreter<'a> {
    /// Creates a new interpreter that writes program output to `output`.
    pub fn new(output: &'a mut dyn Write) -> Self {
        let globals = Rc::new(RefCell::new(Environment::default()));

        for native in NativeFunction::get_globals() {
            let name = native.name.clone();
            globals.borrow_mut().define(&name, Object::from(native));
        }

        Interpreter {
            globals: Rc::clone(&globals),
            environment: globals,
            locals: HashMap::new(),
            output,
        }
    }

    /// Executes the statements in order.
    /// A runtime error stops execution and is reported.
    pub fn interpret(&mut self, statements: &[Stmt], reporter: &mut Reporter) {
        for statement in statements {
            if let Err(unwind) = self.execute(statement) {
                match unwind {
                    Unwind::Error(error) => error.throw(reporter),
                    // The parser and resolver reject loop control and
                    // returns outside of a loop or function.
                    _ => unreachable!(),
                }
                return;
            }
        }
    }

    /// Records the scope distance of a resolved expression.
    /// Called by the resolver.
    pub fn resolve(&mut self, id: usize, distance: usize) {
        self.locals.insert(id, distance);
    }

    fn execute(&mut self, stmt: &Stmt) -> ExecResult {
        stmt.accept(self)
    }

    fn evaluate(&mut self, expr: &Expr) -> EvalResult {
        expr.accept(self)
    }

    /// Executes the statements in the given frame and restores the previous
    /// frame on every exit path.
    pub fn execute_block(&mut self, statements: &[Stmt], environment: Rc<RefCell<Environment>>) -> ExecResult {
        let previous = mem::replace(&mut self.environment, environment);

        let mut result = Ok(());
        for statement in statements {
            result = self.execute(statement);
            if result.is_err() {
                break;
            }
        }

        self.environment = previous;
        result
    }

    /// Reads a variable through the resolution side-table, falling back to
    /// the global frame for unresolved names.
    fn look_up_variable(&self, id: usize, name: &Token) -> EvalResult {
        match self.locals.get(&id) {
            Some(&distance) => {
                self.environment.borrow().get_at(distance, &name.lexeme).ok_or_else(|| RuntimeError {
                    token: name.clone(),
                    message: format!("Undefined variable '{}'.", name.lexeme),
                })
            },
            None => self.globals.borrow().get(name),
        }
    }

    fn number_operands(operator: &Token, left: &Object, right: &Object) -> Result<(f64, f64), RuntimeError> {
        match (left.as_number(), right.as_number()) {
            (Some(left), Some(right)) => Ok((left, right)),
            _ => Err(RuntimeError {
                token: operator.clone(),
                message: "Operands must be numbers.".to_string(),
            }),
        }
    }
}

impl<'a> ExprVisitor<EvalResult> for Interpreter<'a> {
    fn visit_literal_expr(&mut self, literal: &Literal) -> EvalResult {
        Ok(Object::from(literal.clone()))
    }

    fn visit_grouping_expr(&mut self, grouping: &GroupingData) -> EvalResult {
        self.evaluate(&grouping.expr)
    }

    fn visit_unary_expr(&mut self, unary: &UnaryData) -> EvalResult {
        let right = self.evaluate(&unary.expr)?;

        match unary.operator.r#type {
            Type::Minus => (-right).ok_or_else(|| RuntimeError {
                token: unary.operator.clone(),
                message: "Operand must be a number.".to_string(),
            }),
            Type::Bang => Ok(Object::from(!right.is_truthy())),
            _ => unreachable!(),
        }
    }

    fn visit_binary_expr(&mut self, binary: &BinaryData) -> EvalResult {
        let left = self.evaluate(&binary.left)?;
        let right = self.evaluate(&binary.right)?;

        match binary.operator.r#type {
            Type::Greater => {
                let (left, right) = Self::number_operands(&binary.operator, &left, &right)?;
                Ok(Object::from(left > right))
            },
            Type::GreaterEqual => {
                let (left, right) = Self::number_operands(&binary.operator, &left, &right)?;
                Ok(Object::from(left >= right))
            },
            Type::Less => {
                let (left, right) = Self::number_operands(&binary.operator, &left, &right)?;
                Ok(Object::from(left < right))
            },
            Type::LessEqual => {
                let (left, right) = Self::number_operands(&binary.operator, &left, &right)?;
                Ok(Object::from(left <= right))
            },
            Type::EqualEqual => Ok(Object::from(left == right)),
            Type::BangEqual => Ok(Object::from(left != right)),
            Type::Minus => (left - right).ok_or_else(|| RuntimeError {
                token: binary.operator.clone(),
                message: "Operands must be numbers.".to_string(),
            }),
            Type::Slash => (left / right).ok_or_else(|| RuntimeError {
                token: binary.operator.clone(),
                message: "Operands must be numbers.".to_string(),
            }),
            Type::Star => (left * right).ok_or_else(|| RuntimeError {
                token: binary.operator.clone(),
                message: "Operands must be numbers.".to_string(),
            }),
            Type::Plus => (left + right).ok_or_else(|| RuntimeError {
                token: binary.operator.clone(),
                message: "Operands must be numbers or strings.".to_string(),
            }),
            _ => unreachable!(),
        }
    }

    /// Short-circuits on the left operand and returns the last evaluated
    /// operand, not a coerced boolean.
    fn visit_logical_expr(&mut self, logical: &LogicalData) -> EvalResult {
        let left = self.evaluate(&logical.left)?;

        match logical.operator.r#type {
            Type::Or if left.is_truthy() => Ok(left),
            Type::And if !left.is_truthy() => Ok(left),
            _ => self.evaluate(&logical.right),
        }
    }

    fn visit_variable_expr(&mut self, variable: &VariableData) -> EvalResult {
        self.look_up_variable(variable.id, &variable.name)
    }

    fn visit_assign_expr(&mut self, assign: &AssignData) -> EvalResult {
        let value = self.evaluate(&assign.value)?;

        match self.locals.get(&assign.id) {
            Some(&distance) => {
                self.environment.borrow_mut().assign_at(distance, &assign.name, value.clone());
            },
            None => {
                self.globals.borrow_mut().assign(&assign.name, value.clone())?;
            },
        }

        Ok(value)
    }

    fn visit_call_expr(&mut self, call: &CallData) -> EvalResult {
        let callee = self.evaluate(&call.callee)?;

        let mut arguments = Vec::with_capacity(call.arguments.len());
        for argument in &call.arguments {
            arguments.push(self.evaluate(argument)?);
        }

        let callable: &dyn Callable = match &callee {
            Object::Function(function) => function,
            Object::NativeFunction(native) => native,
            Object::Class(class) => class,
            _ => return Err(RuntimeError {
                token: call.paren.clone(),
                message: "Can only call functions and classes.".to_string(),
            }),
        };

        if arguments.len() != callable.arity() {
            return Err(RuntimeError {
                token: call.paren.clone(),
                message: format!("Expected {} arguments but got {}.", callable.arity(), arguments.len()),
            });
        }

        callable.call(self, arguments)
    }

    fn visit_get_expr(&mut self, get: &GetData) -> EvalResult {
        let object = self.evaluate(&get.object)?;

        if let Object::Instance(instance) = &object {
            return Instance::get(instance, &get.name);
        }

        Err(RuntimeError {
            token: get.name.clone(),
            message: "Only instances have properties.".to_string(),
        })
    }

    fn visit_set_expr(&mut self, set: &SetData) -> EvalResult {
        let object = self.evaluate(&set.object)?;

        let Object::Instance(instance) = object else {
            return Err(RuntimeError {
                token: set.name.clone(),
                message: "Only instances have fields.".to_string(),
            });
        };

        let value = self.evaluate(&set.value)?;
        instance.borrow_mut().set(&set.name, value.clone());

        Ok(value)
    }

    fn visit_this_expr(&mut self, this: &ThisData) -> EvalResult {
        self.look_up_variable(this.id, &this.keyword)
    }

    fn visit_super_expr(&mut self, super_expr: &SuperData) -> EvalResult {
        let distance = *self.locals.get(&super_expr.id).expect("'super' to be resolved");

        let superclass = self.environment.borrow().get_at(distance, "super")
            .expect("'super' to be defined in the class frame");
        let Object::Class(superclass) = superclass else { unreachable!() };

        // The resolver pushes the frame holding 'super' exactly one above
        // the frame holding 'this'.
        let instance = self.environment.borrow().get_at(distance - 1, "this")
            .expect("'this' to be defined in the method frame");

        match superclass.find_method(&super_expr.method.lexeme) {
            Some(method) => Ok(Object::from(method.bind(instance))),
            None => Err(RuntimeError {
                token: super_expr.method.clone(),
                message: format!("Undefined property '{}'.", super_expr.method.lexeme),
            }),
        }
    }
}

impl<'a> StmtVisitor<ExecResult> for Interpreter<'a> {
    fn visit_expression_stmt(&mut self, expression: &ExpressionData) -> ExecResult {
        self.evaluate(&expression.expr)?;
        Ok(())
    }

    fn visit_print_stmt(&mut self, print: &PrintData) -> ExecResult {
        let value = self.evaluate(&print.expr)?;
        writeln!(self.output, "{value}").expect("program output to be writable");
        Ok(())
    }

    fn visit_var_stmt(&mut self, var: &VarData) -> ExecResult {
        let value = match &var.initializer {
            Some(initializer) => self.evaluate(initializer)?,
            None => Object::from(Literal::Nil),
        };

        self.environment.borrow_mut().define(&var.name.lexeme, value);
        Ok(())
    }

    fn visit_block_stmt(&mut self, block: &BlockData) -> ExecResult {
        let environment = Environment::new(Some(Rc::clone(&self.environment)));
        self.execute_block(&block.statements, Rc::new(RefCell::new(environment)))
    }

    fn visit_if_stmt(&mut self, if_stmt: &IfData) -> ExecResult {
        if self.evaluate(&if_stmt.condition)?.is_truthy() {
            self.execute(&if_stmt.then_branch)
        } else if let Some(else_branch) = &if_stmt.else_branch {
            self.execute(else_branch)
        } else {
            Ok(())
        }
    }

    /// Runs the body while the condition is truthy. The attached increment
    /// of a desugared for loop runs after every iteration, including ones
    /// ended by `continue`; `break` skips it and exits.
    fn visit_while_stmt(&mut self, while_stmt: &WhileData) -> ExecResult {
        while self.evaluate(&while_stmt.condition)?.is_truthy() {
            match self.execute(&while_stmt.body) {
                Ok(()) => {},
                Err(Unwind::Break) => break,
                Err(Unwind::Continue) => {},
                Err(unwind) => return Err(unwind),
            }

            if let Some(increment) = &while_stmt.increment {
                self.evaluate(increment)?;
            }
        }

        Ok(())
    }

    fn visit_function_stmt(&mut self, function: &FunctionData) -> ExecResult {
        let value = Function::new(function.clone(), Rc::clone(&self.environment), false);
        self.environment.borrow_mut().define(&function.name.lexeme, Object::from(value));
        Ok(())
    }

    fn visit_return_stmt(&mut self, return_stmt: &ReturnData) -> ExecResult {
        let value = match &return_stmt.value {
            Some(value) => self.evaluate(value)?,
            None => Object::from(Literal::Nil),
        };

        Err(Unwind::Return(value))
    }

    fn visit_class_stmt(&mut self, class: &ClassData) -> ExecResult {
        let superclass = match &class.superclass {
            Some(variable) => {
                match self.look_up_variable(variable.id, &variable.name)? {
                    Object::Class(superclass) => Some(superclass),
                    _ => return Err(Unwind::from(RuntimeError {
                        token: variable.name.clone(),
                        message: "Superclass must be a class.".to_string(),
                    })),
                }
            },
            None => None,
        };

        self.environment.borrow_mut().define(&class.name.lexeme, Object::from(Literal::Nil));

        // Methods of a subclass capture a frame that binds 'super'.
        let enclosing = superclass.as_ref().map(|superclass| {
            let mut environment = Environment::new(Some(Rc::clone(&self.environment)));
            environment.define("super", Object::Class(Rc::clone(superclass)));
            mem::replace(&mut self.environment, Rc::new(RefCell::new(environment)))
        });

        let mut methods = HashMap::new();
        for method in &class.methods {
            let is_initializer = method.name.lexeme == "init";
            let function = Function::new(method.clone(), Rc::clone(&self.environment), is_initializer);
            methods.insert(method.name.lexeme.clone(), function);
        }

        let value = Class::new(class.name.lexeme.clone(), superclass, methods);

        if let Some(enclosing) = enclosing {
            self.environment = enclosing;
        }

        self.environment.borrow_mut().assign(&class.name, Object::from(Rc::new(value)))?;
        Ok(())
    }

    fn visit_break_stmt(&mut self) -> ExecResult {
        Err(Unwind::Break)
    }

    fn visit_continue_stmt(&mut self) -> ExecResult {
        Err(Unwind::Continue)
    }
}
