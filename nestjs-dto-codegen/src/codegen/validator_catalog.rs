//! Static tables of the class-validator decorators the generator knows about
//!
//! Declaration order is significant: documentation directives are applied in
//! the order of [`all_validators`], so the generated decorator order follows
//! these tables rather than the order in the schema comment.

/// Decorators that never take arguments
pub const VALIDATORS_WITHOUT_PARAMS: &[&str] = &[
    "IsEmpty",
    "IsDate",
    "IsBoolean",
    "IsString",
    "IsInt",
    "IsPositive",
    "IsNegative",
    "IsBooleanString",
    "IsDateString",
    "IsAlpha",
    "IsAlphanumeric",
    "IsAscii",
    "IsBase32",
    "IsBase64",
    "IsIBAN",
    "IsBIC",
    "IsCreditCard",
    "IsEthereumAddress",
    "IsBtcAddress",
    "IsDataURI",
    "IsFullWidth",
    "IsHalfWidth",
    "IsVariableWidth",
    "IsHexColor",
    "IsHSL",
    "IsHexadecimal",
    "IsOctal",
    "IsPort",
    "IsEAN",
    "IsISIN",
    "IsJWT",
    "IsObject",
    "IsNotEmptyObject",
    "IsLowercase",
    "IsUppercase",
    "IsLatLong",
    "IsLatitude",
    "IsLongitude",
    "IsISO31661Alpha2",
    "IsISO31661Alpha3",
    "IsLocale",
    "IsMongoId",
    "IsMultibyte",
    "IsSurrogatePair",
    "IsMagnetURI",
    "IsFirebasePushId",
    "IsMilitaryTime",
    "IsMimeType",
    "IsSemVer",
    "IsISRC",
    "Allow",
];

/// Decorators with arguments, paired with the canonical default argument list.
///
/// An empty default means the decorator takes arguments but has no sensible
/// placeholder for them.
pub const VALIDATORS_WITH_PARAMS: &[(&str, &str)] = &[
    ("IsDefined", "''"),
    ("Equals", "''"),
    ("NotEquals", "''"),
    ("IsIn", "[]"),
    ("IsNotIn", "[]"),
    ("IsNumber", "{}"),
    ("IsEnum", "{}"),
    ("IsDivisibleBy", "1"),
    ("Min", "0"),
    ("Max", "10"),
    ("MinDate", "new Date()"),
    ("MaxDate", "new Date()"),
    ("IsNumberString", "{}"),
    ("Contains", "''"),
    ("NotContains", "''"),
    ("IsDecimal", "{}"),
    ("IsByteLength", "1, 4"),
    ("IsCurrency", "{}"),
    ("IsEmail", "{}"),
    ("IsFQDN", "{}"),
    ("IsRgbColor", "{}"),
    ("IsIdentityCard", "''"),
    ("IsPassportNumber", "''"),
    ("IsPostalCode", "''"),
    ("IsMACAddress", "{}"),
    ("IsIP", "'4'"),
    ("IsISBN", "'10'"),
    ("IsISO8601", "{}"),
    ("IsMobilePhone", "''"),
    ("IsPhoneNumber", "''"),
    ("IsUrl", "{}"),
    ("IsUUID", "'4'"),
    ("Length", "0, 10"),
    ("MinLength", "0"),
    ("MaxLength", "10"),
    ("Matches", "'', ''"),
    ("IsHash", "'md4'"),
    ("IsISSN", "{}"),
    ("IsInstance", ""),
];

/// Decorators that validate the collection as a whole; never `each`-wrapped
pub const ARRAY_VALIDATORS: &[&str] = &[
    "ArrayContains",
    "ArrayNotContains",
    "ArrayNotEmpty",
    "ArrayMinSize",
    "ArrayMaxSize",
    "ArrayUnique",
];

/// Every catalog name in directive scan order
pub fn all_validators() -> impl Iterator<Item = &'static str> {
    VALIDATORS_WITHOUT_PARAMS
        .iter()
        .copied()
        .chain(VALIDATORS_WITH_PARAMS.iter().map(|(name, _)| *name))
        .chain(ARRAY_VALIDATORS.iter().copied())
}

/// Default argument list of a parameterized decorator, if it has a non-empty one
pub fn default_params(name: &str) -> Option<&'static str> {
    VALIDATORS_WITH_PARAMS
        .iter()
        .find(|(n, _)| *n == name)
        .map(|(_, params)| *params)
        .filter(|params| !params.is_empty())
}

/// Whether the decorator operates on the whole array
pub fn is_array_validator(name: &str) -> bool {
    ARRAY_VALIDATORS.contains(&name)
}

/// Decorator derived from a Prisma scalar type
pub fn scalar_to_validator(scalar: &str) -> Option<&'static str> {
    match scalar {
        "String" => Some("IsString"),
        "Boolean" => Some("IsBoolean"),
        "Int" | "BigInt" => Some("IsInt"),
        "Float" | "Decimal" => Some("IsNumber"),
        "DateTime" => Some("IsRFC3339"),
        _ => None,
    }
}
