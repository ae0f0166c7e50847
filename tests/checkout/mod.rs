mod checkout_file_successfully;
