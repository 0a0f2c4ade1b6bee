use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::FormError;

/// Payment method offered by both forms
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum PaymentMethod {
    #[serde(rename = "Efectivo")]
    Efectivo,
    #[serde(rename = "Tarjeta")]
    Tarjeta,
    #[serde(rename = "Transferencia")]
    Transferencia,
    #[serde(rename = "Nequi")]
    Nequi,
    #[serde(rename = "DaviPlata")]
    DaviPlata,
    #[serde(rename = "Débito Automático")]
    DebitoAutomatico,
    #[serde(rename = "Cheque")]
    Cheque,
}

impl PaymentMethod {
    /// Options rendered by the transaction form, in display order
    pub const TRANSACTION_OPTIONS: [PaymentMethod; 7] = [
        PaymentMethod::Efectivo,
        PaymentMethod::Tarjeta,
        PaymentMethod::Transferencia,
        PaymentMethod::Nequi,
        PaymentMethod::DaviPlata,
        PaymentMethod::DebitoAutomatico,
        PaymentMethod::Cheque,
    ];

    /// Options rendered by the invoice payment form, in display order
    pub const INVOICE_OPTIONS: [PaymentMethod; 6] = [
        PaymentMethod::Efectivo,
        PaymentMethod::Transferencia,
        PaymentMethod::Tarjeta,
        PaymentMethod::Cheque,
        PaymentMethod::Nequi,
        PaymentMethod::DaviPlata,
    ];

    pub fn label(&self) -> &'static str {
        match self {
            PaymentMethod::Efectivo => "Efectivo",
            PaymentMethod::Tarjeta => "Tarjeta",
            PaymentMethod::Transferencia => "Transferencia",
            PaymentMethod::Nequi => "Nequi",
            PaymentMethod::DaviPlata => "DaviPlata",
            PaymentMethod::DebitoAutomatico => "Débito Automático",
            PaymentMethod::Cheque => "Cheque",
        }
    }
}

impl fmt::Display for PaymentMethod {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

impl FromStr for PaymentMethod {
    type Err = FormError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::TRANSACTION_OPTIONS
            .iter()
            .copied()
            .find(|method| method.label() == s)
            .ok_or_else(|| FormError::UnknownPaymentMethod(s.to_string()))
    }
}

/// Direction of a ledger entry
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TransactionType {
    Income,
    #[default]
    Expense,
}

impl TransactionType {
    /// Heading shown on the type toggle
    pub fn label(&self) -> &'static str {
        match self {
            TransactionType::Income => "Ingreso",
            TransactionType::Expense => "Gasto",
        }
    }

    pub fn tagline(&self) -> &'static str {
        match self {
            TransactionType::Income => "Dinero que entra",
            TransactionType::Expense => "Dinero que sale",
        }
    }

    /// Wire value, also used for CSS modifiers
    pub fn as_str(&self) -> &'static str {
        match self {
            TransactionType::Income => "income",
            TransactionType::Expense => "expense",
        }
    }
}

/// Every category label either form can offer.
///
/// Income and expense categories are disjoint; the invoice form offers a
/// subset of the expense categories.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Category {
    #[serde(rename = "Servicios Odontológicos")]
    ServiciosOdontologicos,
    #[serde(rename = "Consultas")]
    Consultas,
    #[serde(rename = "Tratamientos Especializados")]
    TratamientosEspecializados,
    #[serde(rename = "Productos Dentales")]
    ProductosDentales,
    #[serde(rename = "Otros Ingresos")]
    OtrosIngresos,
    #[serde(rename = "Insumos Médicos")]
    InsumosMedicos,
    #[serde(rename = "Nómina")]
    Nomina,
    #[serde(rename = "Servicios Públicos")]
    ServiciosPublicos,
    #[serde(rename = "Mantenimiento")]
    Mantenimiento,
    #[serde(rename = "Marketing")]
    Marketing,
    #[serde(rename = "Proveedores")]
    Proveedores,
    #[serde(rename = "Alquiler")]
    Alquiler,
    #[serde(rename = "Seguros")]
    Seguros,
    #[serde(rename = "Impuestos")]
    Impuestos,
    #[serde(rename = "Otros Gastos")]
    OtrosGastos,
}

impl Category {
    pub const INCOME: [Category; 5] = [
        Category::ServiciosOdontologicos,
        Category::Consultas,
        Category::TratamientosEspecializados,
        Category::ProductosDentales,
        Category::OtrosIngresos,
    ];

    pub const EXPENSE: [Category; 10] = [
        Category::InsumosMedicos,
        Category::Nomina,
        Category::ServiciosPublicos,
        Category::Mantenimiento,
        Category::Marketing,
        Category::Proveedores,
        Category::Alquiler,
        Category::Seguros,
        Category::Impuestos,
        Category::OtrosGastos,
    ];

    /// Categories a supplier invoice payment can be booked under
    pub const INVOICE: [Category; 7] = [
        Category::Proveedores,
        Category::InsumosMedicos,
        Category::ServiciosPublicos,
        Category::Mantenimiento,
        Category::Alquiler,
        Category::Seguros,
        Category::OtrosGastos,
    ];

    pub fn options_for(transaction_type: TransactionType) -> &'static [Category] {
        match transaction_type {
            TransactionType::Income => &Self::INCOME,
            TransactionType::Expense => &Self::EXPENSE,
        }
    }

    /// The partition this category belongs to
    pub fn transaction_type(&self) -> TransactionType {
        if Self::INCOME.contains(self) {
            TransactionType::Income
        } else {
            TransactionType::Expense
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            Category::ServiciosOdontologicos => "Servicios Odontológicos",
            Category::Consultas => "Consultas",
            Category::TratamientosEspecializados => "Tratamientos Especializados",
            Category::ProductosDentales => "Productos Dentales",
            Category::OtrosIngresos => "Otros Ingresos",
            Category::InsumosMedicos => "Insumos Médicos",
            Category::Nomina => "Nómina",
            Category::ServiciosPublicos => "Servicios Públicos",
            Category::Mantenimiento => "Mantenimiento",
            Category::Marketing => "Marketing",
            Category::Proveedores => "Proveedores",
            Category::Alquiler => "Alquiler",
            Category::Seguros => "Seguros",
            Category::Impuestos => "Impuestos",
            Category::OtrosGastos => "Otros Gastos",
        }
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

impl FromStr for Category {
    type Err = FormError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::INCOME
            .iter()
            .chain(Self::EXPENSE.iter())
            .copied()
            .find(|category| category.label() == s)
            .ok_or_else(|| FormError::UnknownCategory(s.to_string()))
    }
}
