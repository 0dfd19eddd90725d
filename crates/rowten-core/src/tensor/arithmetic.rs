//! Elementwise arithmetic between equal-shaped tensors.
//!
//! Compound assignment (`+=`, `-=`, `*=`, `/=`) mutates the left operand
//! in place through the lockstep traversal; binary operators copy the left
//! operand and delegate to the compound form, returning a freshly owned
//! tensor. Operand shapes must be element-wise identical; there is no
//! broadcasting. The shape precondition is enforced through
//! [`checks`](crate::checks); numeric edge cases (division by zero,
//! overflow) follow the element type's native semantics.

use super::types::Tensor;
use crate::checks;
use crate::zip::zip_mut;
use num_traits::NumAssign;
use std::ops::{Add, AddAssign, Div, DivAssign, Mul, MulAssign, Sub, SubAssign};

fn require_same_shape<T: Clone + NumAssign>(op: &str, lhs: &Tensor<T>, rhs: &Tensor<T>) {
    checks::require(lhs.same_shape(rhs), || {
        format!(
            "shape mismatch in tensor `{}`: {:?} vs {:?}",
            op,
            lhs.shape(),
            rhs.shape()
        )
    });
}

impl<T> AddAssign<&Tensor<T>> for Tensor<T>
where
    T: Clone + NumAssign,
{
    fn add_assign(&mut self, rhs: &Tensor<T>) {
        require_same_shape("+=", self, rhs);
        for (x, y) in zip_mut(&mut self.data, &rhs.data) {
            *x += y.clone();
        }
    }
}

impl<T> SubAssign<&Tensor<T>> for Tensor<T>
where
    T: Clone + NumAssign,
{
    fn sub_assign(&mut self, rhs: &Tensor<T>) {
        require_same_shape("-=", self, rhs);
        for (x, y) in zip_mut(&mut self.data, &rhs.data) {
            *x -= y.clone();
        }
    }
}

impl<T> MulAssign<&Tensor<T>> for Tensor<T>
where
    T: Clone + NumAssign,
{
    fn mul_assign(&mut self, rhs: &Tensor<T>) {
        require_same_shape("*=", self, rhs);
        for (x, y) in zip_mut(&mut self.data, &rhs.data) {
            *x *= y.clone();
        }
    }
}

impl<T> DivAssign<&Tensor<T>> for Tensor<T>
where
    T: Clone + NumAssign,
{
    fn div_assign(&mut self, rhs: &Tensor<T>) {
        require_same_shape("/=", self, rhs);
        for (x, y) in zip_mut(&mut self.data, &rhs.data) {
            *x /= y.clone();
        }
    }
}

impl<'b, T> Add<&'b Tensor<T>> for &Tensor<T>
where
    T: Clone + NumAssign,
{
    type Output = Tensor<T>;
    fn add(self, rhs: &'b Tensor<T>) -> Self::Output {
        let mut out = self.clone();
        out += rhs;
        out
    }
}

impl<'b, T> Sub<&'b Tensor<T>> for &Tensor<T>
where
    T: Clone + NumAssign,
{
    type Output = Tensor<T>;
    fn sub(self, rhs: &'b Tensor<T>) -> Self::Output {
        let mut out = self.clone();
        out -= rhs;
        out
    }
}

impl<'b, T> Mul<&'b Tensor<T>> for &Tensor<T>
where
    T: Clone + NumAssign,
{
    type Output = Tensor<T>;
    fn mul(self, rhs: &'b Tensor<T>) -> Self::Output {
        let mut out = self.clone();
        out *= rhs;
        out
    }
}

impl<'b, T> Div<&'b Tensor<T>> for &Tensor<T>
where
    T: Clone + NumAssign,
{
    type Output = Tensor<T>;
    fn div(self, rhs: &'b Tensor<T>) -> Self::Output {
        let mut out = self.clone();
        out /= rhs;
        out
    }
}
