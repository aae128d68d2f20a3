//! GraphQL documents sent to the Storefront API.
//!
//! Fragments are declared once as macros so each operation can inline exactly
//! the fragments it spreads; the Storefront API rejects documents that define
//! unused fragments.

macro_rules! money_fragment {
    () => {
        "fragment Money on MoneyV2 {
  amount
  currencyCode
}
"
    };
}

macro_rules! image_fragment {
    () => {
        "fragment Image on Image {
  id
  url
  altText
  width
  height
}
"
    };
}

macro_rules! product_variant_fragment {
    () => {
        "fragment ProductVariant on ProductVariant {
  id
  title
  availableForSale
  quantityAvailable
  price {
    ...Money
  }
  compareAtPrice {
    ...Money
  }
  selectedOptions {
    name
    value
  }
  image {
    ...Image
  }
}
"
    };
}

pub const GET_SHOP: &str = "query getShop {
  shop {
    name
    description
  }
}
";

/// Card data for the collection grid. `$first` defaults to 12.
pub const GET_COLLECTION_PRODUCTS: &str = concat!(
    money_fragment!(),
    image_fragment!(),
    "query getCollectionProducts($handle: String!, $first: Int = 12) {
  collection(handle: $handle) {
    id
    title
    description
    products(first: $first) {
      nodes {
        id
        handle
        title
        description
        featuredImage {
          ...Image
        }
        priceRange {
          minVariantPrice {
            ...Money
          }
          maxVariantPrice {
            ...Money
          }
        }
        compareAtPriceRange {
          minVariantPrice {
            ...Money
          }
          maxVariantPrice {
            ...Money
          }
        }
        options {
          name
          values
        }
        variants(first: 1) {
          nodes {
            availableForSale
          }
        }
      }
    }
  }
}
"
);

/// Full detail for the quick view: up to 10 images and 100 variants.
pub const GET_PRODUCT_BY_HANDLE: &str = concat!(
    money_fragment!(),
    image_fragment!(),
    product_variant_fragment!(),
    "query getProductByHandle($handle: String!) {
  product(handle: $handle) {
    id
    handle
    title
    description
    descriptionHtml
    vendor
    tags
    featuredImage {
      ...Image
    }
    images(first: 10) {
      nodes {
        ...Image
      }
    }
    options {
      id
      name
      values
    }
    priceRange {
      minVariantPrice {
        ...Money
      }
      maxVariantPrice {
        ...Money
      }
    }
    compareAtPriceRange {
      minVariantPrice {
        ...Money
      }
      maxVariantPrice {
        ...Money
      }
    }
    variants(first: 100) {
      nodes {
        ...ProductVariant
      }
    }
  }
}
"
);

pub const GET_COLLECTIONS: &str = "query getCollections($first: Int!) {
  collections(first: $first) {
    nodes {
      id
      handle
      title
    }
  }
}
";
